//! A mapper shared between a configuring thread and reading threads.
//!
//! Readers take a [`snapshot`](SharedLayoutMapper::snapshot) and query it
//! without holding any lock. Reconfiguration builds a complete new mapper and
//! publishes it with a single pointer swap, so a snapshot always holds a
//! matching pair of tables.

use std::sync::{Arc, PoisonError, RwLock};

use crate::geometry::GridGeometry;
use crate::mapper::LayoutMapper;
use crate::settings::{LayoutSettings, ViewPreferences};

/// Single-writer, many-reader [`LayoutMapper`].
#[derive(Debug, Default)]
pub struct SharedLayoutMapper {
    current: RwLock<Arc<LayoutMapper>>,
}

impl SharedLayoutMapper {
    pub fn new(mapper: LayoutMapper) -> Self {
        Self {
            current: RwLock::new(Arc::new(mapper)),
        }
    }

    /// The mapper as of the last completed reconfiguration.
    pub fn snapshot(&self) -> Arc<LayoutMapper> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a consistent mapper.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Recompute and publish. Returns `true` if a new mapper was published.
    ///
    /// Tables are built outside the lock; readers are blocked only for the
    /// swap.
    pub fn configure(&self, page_count: usize, settings: &LayoutSettings) -> bool {
        let geometry = GridGeometry::compute(page_count, settings);
        if self.snapshot().geometry() == &geometry {
            return false;
        }

        let next = Arc::new(LayoutMapper::build(geometry));
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.geometry() == &geometry {
            return false;
        }
        *guard = next;
        true
    }

    /// [`configure`](Self::configure) from user-facing view preferences.
    pub fn configure_from_preferences(&self, page_count: usize, prefs: &ViewPreferences) -> bool {
        self.configure(page_count, &prefs.layout_settings())
    }
}

impl From<LayoutMapper> for SharedLayoutMapper {
    fn from(mapper: LayoutMapper) -> Self {
        Self::new(mapper)
    }
}
