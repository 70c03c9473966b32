use std::io::{self, Write};

use am_core::frame::AsciiGrid;

/// Écrit la grille ligne par ligne, un `\n` après chaque ligne.
///
/// # Errors
/// Propagates writer errors.
///
/// # Example
/// ```
/// use am_core::frame::AsciiGrid;
/// use am_render::console::write_grid;
/// let mut grid = AsciiGrid::new(2, 1);
/// grid.set(0, 0, '#');
/// let mut out = Vec::new();
/// write_grid(&grid, &mut out).unwrap();
/// assert_eq!(out, b"# \n");
/// ```
pub fn write_grid<W: Write>(grid: &AsciiGrid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter());
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_row() {
        let mut grid = AsciiGrid::new(3, 2);
        grid.set(0, 0, 'a');
        grid.set(2, 1, 'z');
        let mut out = Vec::new();
        write_grid(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a  \n  z\n");
    }

    #[test]
    fn empty_grid_writes_nothing() {
        let mut out = Vec::new();
        write_grid(&AsciiGrid::new(0, 0), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
