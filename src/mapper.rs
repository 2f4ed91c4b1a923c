//! Cached page ↔ grid cell lookup tables.
//!
//! # Example
//!
//! ```
//! use pagegrid::{GridPosition, LayoutMapper, LayoutSettings};
//!
//! let mut mapper = LayoutMapper::new();
//! mapper.configure(10, &LayoutSettings::fixed_columns(2));
//!
//! assert_eq!((mapper.columns(), mapper.rows()), (2, 5));
//! assert_eq!(mapper.position(3), GridPosition::new(1, 1));
//! assert_eq!(mapper.page_at(GridPosition::new(0, 4)), Some(8));
//! ```

use core::ops::Index;

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::geometry::{GridGeometry, GridPosition};
use crate::settings::{LayoutSettings, Orientation, ViewPreferences};

/// Maps page indices to grid cells and back.
///
/// Both tables are materialized from [`GridGeometry::map`] whenever the
/// geometry changes, so lookups are O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutMapper {
    geometry: GridGeometry,
    /// Indexed by page.
    page_to_raster: Vec<GridPosition>,
    /// Indexed by [`GridGeometry::cell_index`].
    raster_to_page: Vec<Option<usize>>,
}

impl LayoutMapper {
    /// An empty mapper: no pages on a single cell.
    pub fn new() -> Self {
        Self::build(GridGeometry::default())
    }

    /// Mapper for `page_count` pages laid out with `settings`.
    pub fn with_settings(page_count: usize, settings: &LayoutSettings) -> Self {
        Self::build(GridGeometry::compute(page_count, settings))
    }

    /// Recompute for a new page count or new settings.
    ///
    /// Returns `true` if the tables changed. Identical inputs leave the
    /// tables untouched and return `false`.
    pub fn configure(&mut self, page_count: usize, settings: &LayoutSettings) -> bool {
        let geometry = GridGeometry::compute(page_count, settings);
        if geometry == self.geometry {
            return false;
        }
        *self = Self::build(geometry);
        true
    }

    /// [`configure`](Self::configure) from user-facing view preferences.
    pub fn configure_from_preferences(
        &mut self,
        page_count: usize,
        prefs: &ViewPreferences,
    ) -> bool {
        self.configure(page_count, &prefs.layout_settings())
    }

    pub(crate) fn build(geometry: GridGeometry) -> Self {
        let mut page_to_raster = vec![GridPosition::default(); geometry.page_count];
        let mut raster_to_page = vec![None; geometry.cell_count()];

        for row in 0..geometry.rows {
            for col in 0..geometry.cols {
                let pos = GridPosition::new(col, row);
                if let Some(page) = geometry.map(pos) {
                    page_to_raster[page] = pos;
                    raster_to_page[geometry.cell_index(pos)] = Some(page);
                }
            }
        }

        Self {
            geometry,
            page_to_raster,
            raster_to_page,
        }
    }

    /// Grid cell of `page`.
    ///
    /// # Panics
    ///
    /// If `page >= self.page_count()`. Asking for a page the layout does not
    /// contain is a caller bug; use [`get_position`](Self::get_position) when
    /// the page may be gone.
    pub fn position(&self, page: usize) -> GridPosition {
        assert!(
            page < self.page_to_raster.len(),
            "page {page} out of range for layout of {} pages",
            self.page_to_raster.len()
        );
        self.page_to_raster[page]
    }

    /// Grid cell of `page`, or `None` if the layout has no such page.
    pub fn get_position(&self, page: usize) -> Option<GridPosition> {
        self.page_to_raster.get(page).copied()
    }

    /// Page shown at `pos`. `None` for empty cells (leading offset slots,
    /// partial last row or column) and for positions outside the grid.
    pub fn page_at(&self, pos: GridPosition) -> Option<usize> {
        if !self.geometry.contains(pos) {
            return None;
        }
        self.raster_to_page[self.geometry.cell_index(pos)]
    }

    /// Every cell in row-major order with the page it shows, if any.
    pub fn cells(&self) -> impl Iterator<Item = (GridPosition, Option<usize>)> + '_ {
        let cols = self.geometry.cols;
        self.raster_to_page
            .iter()
            .enumerate()
            .map(move |(i, &page)| (GridPosition::new(i % cols, i / cols), page))
    }

    /// Grid cells in page order.
    pub fn positions(&self) -> &[GridPosition] {
        &self.page_to_raster
    }

    pub fn rows(&self) -> usize {
        self.geometry.rows
    }

    pub fn columns(&self) -> usize {
        self.geometry.cols
    }

    /// Leading blank slots after normalization.
    pub fn first_page_offset(&self) -> usize {
        self.geometry.offset
    }

    pub fn is_paired_pages(&self) -> bool {
        self.geometry.paired_pages
    }

    pub fn page_count(&self) -> usize {
        self.geometry.page_count
    }

    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation
    }

    /// The geometry the tables were built from.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }
}

impl Default for LayoutMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for LayoutMapper {
    type Output = GridPosition;

    /// Same contract as [`LayoutMapper::position`].
    fn index(&self, page: usize) -> &GridPosition {
        assert!(
            page < self.page_to_raster.len(),
            "page {page} out of range for layout of {} pages",
            self.page_to_raster.len()
        );
        &self.page_to_raster[page]
    }
}
