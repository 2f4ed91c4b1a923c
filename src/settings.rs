//! Layout preferences: which axis is fixed, paired spreads, and reading order.
//!
//! [`LayoutSettings`] is the exact input of the grid computation.
//! [`ViewPreferences`] is the user-facing preference set a host application
//! stores; it folds the presentation-mode override into a [`LayoutSettings`].
//!
//! # Example
//!
//! ```
//! use pagegrid::{HorizontalDirection, LayoutSettings, Orientation};
//!
//! let settings = LayoutSettings::fixed_rows(2)
//!     .paired(1)
//!     .orientation(Orientation::Vertical)
//!     .horizontal(HorizontalDirection::RightToLeft);
//!
//! assert!(settings.paired_pages);
//! assert_eq!(settings.pairs_offset, 1);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raster traversal order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Row-major: pages fill a row before moving to the next one.
    #[default]
    Horizontal,
    /// Column-major: pages fill a column (or a spread of two columns)
    /// before moving to the next one.
    Vertical,
}

/// Direction in which columns are numbered on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HorizontalDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Direction in which rows are numbered on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalDirection {
    #[default]
    TopToBottom,
    BottomToTop,
}

/// The axis whose length the user chose. The other axis grows with the
/// page count.
///
/// A count of 0 is accepted and treated as 1 when the grid is computed,
/// since spin buttons can transiently report 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FixedAxis {
    /// Fixed number of rows, columns derived.
    Rows(usize),
    /// Fixed number of columns, rows derived.
    Columns(usize),
}

impl Default for FixedAxis {
    fn default() -> Self {
        Self::Columns(1)
    }
}

impl FixedAxis {
    /// Whether the row count is the fixed one.
    pub fn is_rows(self) -> bool {
        matches!(self, Self::Rows(_))
    }

    /// The requested count, clamped to at least 1.
    pub fn count(self) -> usize {
        match self {
            Self::Rows(n) | Self::Columns(n) => n.max(1),
        }
    }
}

/// Inputs of the page grid computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutSettings {
    /// Which axis has a user-chosen length.
    pub fixed: FixedAxis,
    /// Show pages two-up as spreads.
    pub paired_pages: bool,
    /// Blank slots before the first page. Ignored unless `paired_pages`.
    /// With the default of 1 the first page sits alone on the right half of
    /// its spread, like the cover of a book.
    pub pairs_offset: u32,
    /// Row-major or column-major traversal.
    pub orientation: Orientation,
    /// Column numbering direction.
    pub horizontal: HorizontalDirection,
    /// Row numbering direction.
    pub vertical: VerticalDirection,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            fixed: FixedAxis::default(),
            paired_pages: false,
            pairs_offset: 1,
            orientation: Orientation::default(),
            horizontal: HorizontalDirection::default(),
            vertical: VerticalDirection::default(),
        }
    }
}

impl LayoutSettings {
    /// Fixed number of columns; rows grow with the page count.
    pub fn fixed_columns(columns: usize) -> Self {
        Self {
            fixed: FixedAxis::Columns(columns),
            ..Self::default()
        }
    }

    /// Fixed number of rows; columns grow with the page count.
    pub fn fixed_rows(rows: usize) -> Self {
        Self {
            fixed: FixedAxis::Rows(rows),
            ..Self::default()
        }
    }

    /// Enable paired pages with `offset` blank slots before the first page.
    pub fn paired(mut self, offset: u32) -> Self {
        self.paired_pages = true;
        self.pairs_offset = offset;
        self
    }

    /// Disable paired pages.
    pub fn unpaired(mut self) -> Self {
        self.paired_pages = false;
        self
    }

    /// Set traversal orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set column numbering direction.
    pub fn horizontal(mut self, direction: HorizontalDirection) -> Self {
        self.horizontal = direction;
        self
    }

    /// Set row numbering direction.
    pub fn vertical(mut self, direction: VerticalDirection) -> Self {
        self.vertical = direction;
        self
    }

    /// The leading blank slot count actually applied: the pairs offset when
    /// paired, otherwise 0.
    pub fn effective_offset(&self) -> usize {
        if self.paired_pages {
            self.pairs_offset as usize
        } else {
            0
        }
    }
}

/// User-facing view preferences, as a host application stores them.
///
/// Convert with [`ViewPreferences::layout_settings`] (or `From`) before
/// configuring a mapper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ViewPreferences {
    /// Presentation mode shows one page per screen in a single column.
    pub presentation_mode: bool,
    /// Fix the row count instead of the column count.
    pub fixed_rows: bool,
    /// Row count used when `fixed_rows`.
    pub rows: usize,
    /// Column count used unless `fixed_rows`.
    pub columns: usize,
    /// Show spreads.
    pub paired_pages: bool,
    /// Raw pairs offset preference; negative values are treated as 0.
    pub pairs_offset: i32,
    /// Column-major layout.
    pub vertical_layout: bool,
    /// Number columns from the right.
    pub right_to_left: bool,
    /// Number rows from the bottom.
    pub bottom_to_top: bool,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            presentation_mode: false,
            fixed_rows: false,
            rows: 1,
            columns: 1,
            paired_pages: false,
            pairs_offset: 1,
            vertical_layout: false,
            right_to_left: false,
            bottom_to_top: false,
        }
    }
}

impl ViewPreferences {
    /// Resolve the preferences into grid computation inputs.
    ///
    /// Presentation mode overrides the axis preferences with a single
    /// vertical column.
    pub fn layout_settings(&self) -> LayoutSettings {
        let (fixed, orientation) = if self.presentation_mode {
            (FixedAxis::Columns(1), Orientation::Vertical)
        } else {
            let fixed = if self.fixed_rows {
                FixedAxis::Rows(self.rows)
            } else {
                FixedAxis::Columns(self.columns)
            };
            let orientation = if self.vertical_layout {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            (fixed, orientation)
        };

        LayoutSettings {
            fixed,
            paired_pages: self.paired_pages,
            pairs_offset: if self.paired_pages {
                self.pairs_offset.max(0) as u32
            } else {
                0
            },
            orientation,
            horizontal: if self.right_to_left {
                HorizontalDirection::RightToLeft
            } else {
                HorizontalDirection::LeftToRight
            },
            vertical: if self.bottom_to_top {
                VerticalDirection::BottomToTop
            } else {
                VerticalDirection::TopToBottom
            },
        }
    }
}

impl From<&ViewPreferences> for LayoutSettings {
    fn from(prefs: &ViewPreferences) -> Self {
        prefs.layout_settings()
    }
}

impl From<ViewPreferences> for LayoutSettings {
    fn from(prefs: ViewPreferences) -> Self {
        prefs.layout_settings()
    }
}
