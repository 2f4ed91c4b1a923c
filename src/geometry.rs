//! Grid dimensions and the cell → page correspondence.
//!
//! [`GridGeometry`] is derived from a page count and [`LayoutSettings`]. It is
//! plain comparable data: two equal geometries produce identical lookup
//! tables, which is what the mapper uses to skip redundant rebuilds.
//!
//! ```text
//!     Vertical, paired, 2 rows, offset 1, 6 pages:
//!
//!     col:   0    1  │  2    3
//!          ┌────┬────┼────┬────┐
//!     row 0│    │ p0 │ p3 │ p4 │
//!          ├────┼────┼────┼────┤
//!     row 1│ p1 │ p2 │ p5 │    │
//!          └────┴────┴────┴────┘
//! ```
//!
//! Each spread (column pair) is filled row by row before moving on to the
//! next spread.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::settings::{
    FixedAxis, HorizontalDirection, LayoutSettings, Orientation, VerticalDirection,
};

/// A cell in the page grid, 0-indexed from the top-left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPosition {
    pub col: usize,
    pub row: usize,
}

impl GridPosition {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Derived grid dimensions plus everything the cell → page mapping reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    /// Number of real pages.
    pub page_count: usize,
    /// Row count, at least 1.
    pub rows: usize,
    /// Column count, at least 1, even when paired.
    pub cols: usize,
    /// Leading blank slots, normalized to one traversal cycle.
    pub offset: usize,
    pub paired_pages: bool,
    pub orientation: Orientation,
    pub horizontal: HorizontalDirection,
    pub vertical: VerticalDirection,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::compute(0, &LayoutSettings::default())
    }
}

impl GridGeometry {
    /// Size the grid for `page_count` pages.
    ///
    /// The fixed axis is taken as given (at least 1). The other axis is just
    /// long enough for every page plus the leading blank slots. With paired
    /// pages the column count is rounded up to even, whichever axis is fixed.
    pub fn compute(page_count: usize, settings: &LayoutSettings) -> Self {
        let paired = settings.paired_pages;
        let leading = settings.effective_offset();
        let slots = page_count + leading;

        let (rows, cols) = match settings.fixed {
            FixedAxis::Rows(_) => {
                let rows = settings.fixed.count();
                let cols = round_up_even(slots.div_ceil(rows).max(1), paired);
                (rows, cols)
            }
            FixedAxis::Columns(_) => {
                let cols = round_up_even(settings.fixed.count(), paired);
                let rows = slots.div_ceil(cols).max(1);
                (rows, cols)
            }
        };

        // One traversal cycle of the minor axis. Vertical spreads consume two
        // columns per pass, hence 2 * rows.
        let cycle = match (settings.orientation, paired) {
            (Orientation::Vertical, true) => 2 * rows,
            (Orientation::Vertical, false) => rows,
            (Orientation::Horizontal, _) => cols,
        };

        Self {
            page_count,
            rows,
            cols,
            offset: leading % cycle,
            paired_pages: paired,
            orientation: settings.orientation,
            horizontal: settings.horizontal,
            vertical: settings.vertical,
        }
    }

    /// Total number of cells, occupied or not.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    /// Row-major slot of `pos` in a dense per-cell table.
    pub(crate) fn cell_index(&self, pos: GridPosition) -> usize {
        pos.col + pos.row * self.cols
    }

    /// The spread a cell belongs to when pages are paired: the index of its
    /// on-screen column pair. `None` when unpaired or outside the grid.
    pub fn spread_of(&self, pos: GridPosition) -> Option<usize> {
        (self.paired_pages && self.contains(pos)).then_some(pos.col / 2)
    }

    /// Page shown at `pos`, or `None` for padding cells and positions outside
    /// the grid.
    pub fn map(&self, pos: GridPosition) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }

        let col = match self.horizontal {
            HorizontalDirection::LeftToRight => pos.col,
            HorizontalDirection::RightToLeft => self.cols - 1 - pos.col,
        };
        let row = match self.vertical {
            VerticalDirection::TopToBottom => pos.row,
            VerticalDirection::BottomToTop => self.rows - 1 - pos.row,
        };

        let slot = match (self.orientation, self.paired_pages) {
            (Orientation::Vertical, true) => (row + self.rows * (col / 2)) * 2 + col % 2,
            (Orientation::Vertical, false) => row + self.rows * col,
            (Orientation::Horizontal, _) => col + self.cols * row,
        };

        slot.checked_sub(self.offset).filter(|&page| page < self.page_count)
    }
}

fn round_up_even(n: usize, paired: bool) -> usize {
    if paired { n + n % 2 } else { n }
}
