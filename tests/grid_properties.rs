//! Exhaustive property checks over every small layout configuration.
//!
//! Each configuration is checked two ways: structurally (the tables form a
//! bijection between pages and occupied cells, the grid is large enough,
//! paired grids have even column counts) and against an independent
//! page → cell formula that walks the grid forwards instead of inverting the
//! cell → page mapping the tables are built from.

use std::collections::HashSet;

use pagegrid::*;

// ---- Configuration sweep ----

const MAX_PAGES: usize = 30;
const MAX_FIXED: usize = 5;
const MAX_OFFSET: u32 = 4;

const HORIZONTAL: [HorizontalDirection; 2] = [
    HorizontalDirection::LeftToRight,
    HorizontalDirection::RightToLeft,
];
const VERTICAL: [VerticalDirection; 2] = [
    VerticalDirection::TopToBottom,
    VerticalDirection::BottomToTop,
];

/// Every combination of axis, count, pairing, offset and direction.
fn all_settings() -> Vec<LayoutSettings> {
    let mut out = Vec::new();
    for n in 0..=MAX_FIXED {
        for fixed in [FixedAxis::Rows(n), FixedAxis::Columns(n)] {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                for horizontal in HORIZONTAL {
                    for vertical in VERTICAL {
                        let base = LayoutSettings {
                            fixed,
                            orientation,
                            horizontal,
                            vertical,
                            ..LayoutSettings::default()
                        }
                        .unpaired();
                        out.push(base);
                        for offset in 0..=MAX_OFFSET {
                            out.push(base.paired(offset));
                        }
                    }
                }
            }
        }
    }
    out
}

/// Page → cell by walking the traversal order forwards.
fn forward_position(g: &GridGeometry, page: usize) -> GridPosition {
    let slot = page + g.offset;
    let walk = |n: usize, cols: usize, rows: usize| match g.orientation {
        Orientation::Vertical => (n / rows, n % rows),
        Orientation::Horizontal => (n % cols, n / cols),
    };
    let (col, row) = if g.paired_pages {
        let (spread, row) = walk(slot / 2, g.cols / 2, g.rows);
        (spread * 2 + slot % 2, row)
    } else {
        walk(slot, g.cols, g.rows)
    };
    let col = match g.horizontal {
        HorizontalDirection::LeftToRight => col,
        HorizontalDirection::RightToLeft => g.cols - 1 - col,
    };
    let row = match g.vertical {
        VerticalDirection::TopToBottom => row,
        VerticalDirection::BottomToTop => g.rows - 1 - row,
    };
    GridPosition::new(col, row)
}

fn describe(page_count: usize, s: &LayoutSettings) -> String {
    format!("{page_count} pages, {s:?}")
}

// ---- Properties ----

#[test]
fn bijection_between_pages_and_cells() {
    for settings in all_settings() {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            let ctx = describe(page_count, &settings);

            for page in 0..page_count {
                let pos = m.position(page);
                assert!(
                    m.geometry().contains(pos),
                    "{ctx}: page {page} at {pos} outside grid"
                );
                assert_eq!(m.page_at(pos), Some(page), "{ctx}: round trip of page {page}");
            }

            let mut seen = HashSet::new();
            for (pos, page) in m.cells() {
                if let Some(page) = page {
                    assert!(page < page_count, "{ctx}: cell {pos} holds page {page}");
                    assert!(seen.insert(page), "{ctx}: page {page} in two cells");
                    assert_eq!(m.position(page), pos, "{ctx}: inverse of cell {pos}");
                }
            }
            assert_eq!(seen.len(), page_count, "{ctx}: occupied cell count");
        }
    }
}

#[test]
fn grid_is_large_enough() {
    for settings in all_settings() {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            let ctx = describe(page_count, &settings);
            assert!(m.rows() >= 1 && m.columns() >= 1, "{ctx}");
            assert!(m.rows() * m.columns() >= page_count, "{ctx}");
            assert!(
                m.rows() * m.columns() >= page_count + m.first_page_offset(),
                "{ctx}: offset slots must fit too"
            );
        }
    }
}

#[test]
fn fixed_axis_is_respected() {
    for settings in all_settings() {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            let ctx = describe(page_count, &settings);
            match settings.fixed {
                FixedAxis::Rows(n) => assert_eq!(m.rows(), n.max(1), "{ctx}"),
                FixedAxis::Columns(n) => {
                    let n = n.max(1);
                    let expected = if settings.paired_pages { n + n % 2 } else { n };
                    assert_eq!(m.columns(), expected, "{ctx}");
                }
            }
        }
    }
}

#[test]
fn paired_columns_are_even() {
    for settings in all_settings().into_iter().filter(|s| s.paired_pages) {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            assert!(m.is_paired_pages());
            assert_eq!(m.columns() % 2, 0, "{}", describe(page_count, &settings));
        }
    }
}

#[test]
fn offset_wraps_within_one_cycle() {
    for settings in all_settings() {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            let cycle = match (m.orientation(), m.is_paired_pages()) {
                (Orientation::Vertical, true) => 2 * m.rows(),
                (Orientation::Vertical, false) => m.rows(),
                (Orientation::Horizontal, _) => m.columns(),
            };
            assert!(m.first_page_offset() < cycle);
            assert_eq!(
                m.first_page_offset(),
                settings.effective_offset() % cycle,
                "{}",
                describe(page_count, &settings)
            );
        }
    }
}

#[test]
fn tables_match_forward_walk() {
    for settings in all_settings() {
        for page_count in 0..=MAX_PAGES {
            let m = LayoutMapper::with_settings(page_count, &settings);
            for page in 0..page_count {
                assert_eq!(
                    m.position(page),
                    forward_position(m.geometry(), page),
                    "{}: page {page}",
                    describe(page_count, &settings)
                );
            }
        }
    }
}

#[test]
fn reconfigure_is_idempotent() {
    for settings in all_settings() {
        for page_count in [0, 1, 7, MAX_PAGES] {
            let mut m = LayoutMapper::new();
            m.configure(page_count, &settings);
            let first = m.clone();
            assert!(!m.configure(page_count, &settings));
            assert_eq!(m, first, "{}", describe(page_count, &settings));
        }
    }
}

#[test]
fn reconfigure_matches_fresh_build() {
    // Walk one mapper through every configuration; each step must equal a
    // mapper built from scratch.
    let mut m = LayoutMapper::new();
    for settings in all_settings() {
        for page_count in [3, 0, 12] {
            m.configure(page_count, &settings);
            assert_eq!(m, LayoutMapper::with_settings(page_count, &settings));
        }
    }
}

#[test]
fn growing_document_stays_covered() {
    for settings in all_settings() {
        let mut m = LayoutMapper::new();
        for page_count in 0..=MAX_PAGES {
            m.configure(page_count, &settings);
            assert!(m.rows() * m.columns() >= page_count);
            if page_count > 0 {
                let last = m.position(page_count - 1);
                assert_eq!(m.page_at(last), Some(page_count - 1));
            }
        }
    }
}

#[test]
fn outside_grid_has_no_page() {
    for settings in all_settings() {
        let m = LayoutMapper::with_settings(MAX_PAGES, &settings);
        let (cols, rows) = (m.columns(), m.rows());
        for row in 0..rows {
            assert_eq!(m.page_at(GridPosition::new(cols, row)), None);
        }
        for col in 0..cols {
            assert_eq!(m.page_at(GridPosition::new(col, rows)), None);
        }
    }
}

// ---- Reading order ----

/// Pages in on-screen reading order: rows top to bottom, cells left to right.
fn screen_order(m: &LayoutMapper) -> Vec<Option<usize>> {
    m.cells().map(|(_, page)| page).collect()
}

#[test]
fn right_to_left_mirrors_each_row() {
    let ltr = LayoutMapper::with_settings(11, &LayoutSettings::fixed_columns(4).paired(1));
    let rtl = LayoutMapper::with_settings(
        11,
        &LayoutSettings::fixed_columns(4)
            .paired(1)
            .horizontal(HorizontalDirection::RightToLeft),
    );
    let (a, b) = (screen_order(&ltr), screen_order(&rtl));
    for (row_a, row_b) in a.chunks(4).zip(b.chunks(4)) {
        let mirrored: Vec<_> = row_b.iter().rev().copied().collect();
        assert_eq!(row_a, mirrored.as_slice());
    }
}

#[test]
fn bottom_to_top_mirrors_rows() {
    let settings = LayoutSettings::fixed_rows(3).orientation(Orientation::Vertical);
    let ttb = LayoutMapper::with_settings(8, &settings);
    let btt = LayoutMapper::with_settings(8, &settings.vertical(VerticalDirection::BottomToTop));
    let cols = ttb.columns();
    let a = screen_order(&ttb);
    let b = screen_order(&btt);
    let flipped: Vec<_> = b.chunks(cols).rev().flatten().copied().collect();
    assert_eq!(a, flipped);
}

#[test]
fn book_layout_starts_on_the_right() {
    // Two-up with the default offset of 1: the cover stands alone on the
    // right, then pages pair up 1|2, 3|4, ...
    let m = LayoutMapper::with_settings(6, &LayoutSettings::fixed_columns(2).paired(1));
    assert_eq!(
        screen_order(&m),
        vec![
            None,
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            None
        ]
    );
}

#[test]
fn presentation_mode_is_a_single_column() {
    for prefs in [
        ViewPreferences {
            presentation_mode: true,
            fixed_rows: true,
            rows: 3,
            ..ViewPreferences::default()
        },
        ViewPreferences {
            presentation_mode: true,
            columns: 6,
            paired_pages: true,
            pairs_offset: 0,
            ..ViewPreferences::default()
        },
    ] {
        let mut m = LayoutMapper::new();
        m.configure_from_preferences(9, &prefs);
        let per_row = m.columns();
        // Paired presentation still rounds the single column up to a spread.
        assert_eq!(per_row, if prefs.paired_pages { 2 } else { 1 });
        assert_eq!(m.orientation(), Orientation::Vertical);
        if !prefs.paired_pages {
            for page in 0..9 {
                assert_eq!(m.position(page), GridPosition::new(0, page));
            }
        }
    }
}
