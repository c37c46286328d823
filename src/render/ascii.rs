//! Plain-text rendering
//!
//! One line per grid row, cell symbols separated by a single space.

use crate::world::{Coord, Grid, RoomKind};

/// Render a grid row-major, one row per line
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));
    for row in 0..grid.rows() {
        let line: Vec<String> = (0..grid.cols())
            .filter_map(|col| grid.get(Coord::new(row, col)))
            .map(|kind| kind.symbol().to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Symbol legend, one `symbol name` pair per line
pub fn render_legend() -> String {
    RoomKind::ALL
        .iter()
        .map(|kind| format!("{} {}\n", kind.symbol(), kind.name()))
        .collect()
}
