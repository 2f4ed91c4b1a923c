//! SVG visualization of a page grid.
//!
//! Draws every cell of a configured [`LayoutMapper`] with the (1-based) page
//! it shows. Empty cells are dashed, and with paired pages each spread gets an
//! outline so the pairing and the effect of the pairs offset are visible at a
//! glance.
//!
//! # Example
//!
//! ```
//! use pagegrid::{LayoutMapper, LayoutSettings, Orientation, svg::render_grid_svg};
//!
//! let mapper = LayoutMapper::with_settings(
//!     7,
//!     &LayoutSettings::fixed_rows(2).paired(1).orientation(Orientation::Vertical),
//! );
//!
//! let svg = render_grid_svg(&mapper);
//! // svg is a complete SVG document string
//! assert!(svg.contains(">7<"));
//! ```

use std::fmt::Write;

use crate::mapper::LayoutMapper;
use crate::settings::{HorizontalDirection, Orientation, VerticalDirection};

/// Maximum pixel width of the grid panel.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of the grid panel.
const MAX_PANEL_H: f64 = 360.0;
/// Largest cell edge, so tiny grids don't render as huge blocks.
const MAX_CELL: f64 = 60.0;
/// Gap between cells.
const CELL_GAP: f64 = 4.0;
/// Extra gap between spreads.
const SPREAD_GAP: f64 = 10.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin.
const MARGIN_TOP: f64 = 20.0;
/// Height of the label text area above the grid.
const LABEL_H: f64 = 40.0;

/// Render a complete SVG document showing which page sits in which cell.
pub fn render_grid_svg(mapper: &LayoutMapper) -> String {
    let geometry = mapper.geometry();
    let (cols, rows) = (geometry.cols, geometry.rows);
    let paired = geometry.paired_pages;

    let spread_gaps = if paired { (cols / 2).saturating_sub(1) } else { 0 };
    let cell = cell_size(cols, rows, spread_gaps);
    let grid_w = cols as f64 * (cell + CELL_GAP) - CELL_GAP + spread_gaps as f64 * SPREAD_GAP;
    let grid_h = rows as f64 * (cell + CELL_GAP) - CELL_GAP;

    let total_w = grid_w.max(MAX_CELL * 4.0) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + grid_h + MARGIN_TOP;
    let grid_x = (total_w - grid_w) / 2.0;
    let grid_y = MARGIN_TOP + LABEL_H;
    let cell_x = |col: usize| {
        let spread_shift = if paired { (col / 2) as f64 * SPREAD_GAP } else { 0.0 };
        grid_x + col as f64 * (cell + CELL_GAP) + spread_shift
    };
    let cell_y = |row: usize| grid_y + row as f64 * (cell + CELL_GAP);

    let mut svg = String::with_capacity(4096);

    // SVG header. Writing to a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    );
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .page { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .page-label { font-size: 12px; fill: #fff; }
  .empty { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .spread { fill: none; stroke: #555; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .page { fill: #3a72a4; stroke: #5a9fd4; }
    .empty { stroke: #666; }
    .spread { stroke: #aaa; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!(
            "Grid {}×{}  {} pages",
            cols,
            rows,
            mapper.page_count()
        ))
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 30.0,
        escape_xml(&annotation(mapper))
    );

    // Spread outlines behind the cells.
    if paired {
        for spread in 0..cols / 2 {
            let x = cell_x(spread * 2) - CELL_GAP / 2.0;
            let w = 2.0 * cell + 2.0 * CELL_GAP;
            let _ = writeln!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="spread" rx="3"/>"#,
                x,
                grid_y - CELL_GAP / 2.0,
                w,
                grid_h + CELL_GAP
            );
        }
    }

    for (pos, page) in mapper.cells() {
        let x = cell_x(pos.col);
        let y = cell_y(pos.row);
        match page {
            Some(page) => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="page" rx="2"/>"#,
                    x, y, cell, cell
                );
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" class="page-label" text-anchor="middle">{}</text>"#,
                    x + cell / 2.0,
                    y + cell / 2.0 + 4.0,
                    page + 1
                );
            }
            None => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="empty" rx="2"/>"#,
                    x, y, cell, cell
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Largest square cell that keeps the grid within MAX_PANEL_W × MAX_PANEL_H.
fn cell_size(cols: usize, rows: usize, spread_gaps: usize) -> f64 {
    let avail_w = MAX_PANEL_W - (cols - 1) as f64 * CELL_GAP - spread_gaps as f64 * SPREAD_GAP;
    let avail_h = MAX_PANEL_H - (rows - 1) as f64 * CELL_GAP;
    (avail_w / cols as f64)
        .min(avail_h / rows as f64)
        .clamp(1.0, MAX_CELL)
}

/// Second line under the label: traversal, directions, pairing.
fn annotation(mapper: &LayoutMapper) -> String {
    let g = mapper.geometry();
    let orientation = match g.orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    };
    let horizontal = match g.horizontal {
        HorizontalDirection::LeftToRight => "ltr",
        HorizontalDirection::RightToLeft => "rtl",
    };
    let vertical = match g.vertical {
        VerticalDirection::TopToBottom => "ttb",
        VerticalDirection::BottomToTop => "btt",
    };
    if g.paired_pages {
        format!(
            "{orientation}, {horizontal}/{vertical}, paired, offset {}",
            g.offset
        )
    } else {
        format!("{orientation}, {horizontal}/{vertical}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
