//! Page grid mapping for document views.
//!
//! Computes where each page of a document goes in a 2D grid, honoring fixed
//! rows or columns, paired pages (spreads), a leading blank offset,
//! row- or column-major traversal, and reading direction. Pure integer
//! arithmetic, `no_std` compatible (the lookup tables need `alloc`).
//!
//! # Modules
//!
//! - [`settings`]: Layout preferences and the presentation-mode override
//! - [`geometry`]: Grid dimensions and the cell → page mapping
//! - [`mapper`]: Cached page ↔ cell lookup tables
//! - [`shared`]: Snapshot publication for single-writer, many-reader use
//! - [`svg`]: Debug rendering of a grid (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
#[cfg(feature = "alloc")]
pub mod mapper;
pub mod settings;
#[cfg(feature = "std")]
pub mod shared;
#[cfg(feature = "svg")]
pub mod svg;

pub use geometry::{GridGeometry, GridPosition};
#[cfg(feature = "alloc")]
pub use mapper::LayoutMapper;
pub use settings::{
    FixedAxis, HorizontalDirection, LayoutSettings, Orientation, VerticalDirection,
    ViewPreferences,
};
#[cfg(feature = "std")]
pub use shared::SharedLayoutMapper;
