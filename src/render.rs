//! Text rendering of a grid: column headers, a separator and a row gutter.

use alloc::string::String;
use core::fmt::Write;

use crate::grid::Grid;

/// Format `grid` as the classic table:
///
/// ```text
///      0  1  2
///    ----------
///  0 | 0  3  0
/// ```
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_table(&mut out, grid);
    out
}

fn write_table<W: Write>(out: &mut W, grid: &Grid) -> core::fmt::Result {
    write!(out, "    ")?;
    for c in 0..grid.size() {
        write!(out, "{:2} ", c)?;
    }
    writeln!(out)?;

    write!(out, "   ")?;
    for _ in 0..grid.size() {
        write!(out, "---")?;
    }
    writeln!(out, "-")?;

    for (r, row) in grid.rows().enumerate() {
        write!(out, "{:2} |", r)?;
        for cell in row {
            write!(out, " {} ", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print `grid` to stdout with a one-line legend.
#[cfg(feature = "std")]
pub fn print_grid(grid: &Grid) {
    std::println!(
        "BOARD {}x{} (0 = empty, 3 = ship, 5 = effect):",
        grid.size(),
        grid.size()
    );
    std::print!("{}", render_text(grid));
}

/// JSON view of a grid: size, rows of tokens, and cell counts.
#[cfg(feature = "std")]
pub fn render_json(grid: &Grid) -> serde_json::Value {
    use crate::grid::Cell;

    let rows: std::vec::Vec<std::vec::Vec<u8>> = grid
        .rows()
        .map(|row| row.iter().map(|cell| cell.code()).collect())
        .collect();
    serde_json::json!({
        "size": grid.size(),
        "rows": rows,
        "occupied": grid.count(Cell::Occupied),
        "effect": grid.count(Cell::Effect),
    })
}
