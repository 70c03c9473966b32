use std::fmt;

use crate::traits::ImageSource;

/// Buffer de pixels RGB, row-major, 3 bytes par pixel.
///
/// # Example
/// ```
/// use am_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameBuffer {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use am_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, (0, 0, 0))
    }

    /// Crée un buffer uniformément rempli de `color`.
    ///
    /// # Example
    /// ```
    /// use am_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, (255, 255, 255));
    /// assert_eq!(fb.pixel(1, 1), (255, 255, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: (u8, u8, u8)) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&[color.0, color.1, color.2]);
        }
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Accès au pixel (x, y) → (r, g, b).
    ///
    /// # Example
    /// ```
    /// use am_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0));
    /// ```
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        match self.data.get(idx..idx + 3) {
            Some(&[r, g, b]) => (r, g, b),
            _ => (0, 0, 0),
        }
    }

    /// Écrit le pixel (x, y). Hors limites : ignoré.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: (u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx..idx + 3].copy_from_slice(&[color.0, color.1, color.2]);
    }

    /// Copie la région carrée de côté `side` dont le coin haut-gauche est (x, y).
    ///
    /// Pixels hors limites : non copiés (la région est tronquée).
    ///
    /// # Example
    /// ```
    /// use am_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(4, 4, (9, 9, 9));
    /// let tile = fb.crop_square(2, 2, 2);
    /// assert_eq!((tile.width, tile.height), (2, 2));
    /// ```
    #[must_use]
    pub fn crop_square(&self, x: u32, y: u32, side: u32) -> Self {
        let w = side.min(self.width.saturating_sub(x));
        let h = side.min(self.height.saturating_sub(y));
        let mut data = Vec::with_capacity(w as usize * h as usize * 3);
        if w == 0 || h == 0 {
            return Self::new(0, 0);
        }
        for row in y..y + h {
            let start = self.index(x, row);
            data.extend_from_slice(&self.data[start..start + w as usize * 3]);
        }
        Self {
            data,
            width: w,
            height: h,
        }
    }
}

impl ImageSource for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        FrameBuffer::pixel(self, x, y)
    }
}

/// Grille de sortie ASCII, row-major.
///
/// # Example
/// ```
/// use am_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(3, 2);
/// grid.set(2, 1, '@');
/// assert_eq!(grid.get(2, 1), '@');
/// assert_eq!(grid.to_string(), "   \n  @");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of characters, row-major.
    pub cells: Vec<char>,
    /// Width in characters (columns).
    pub width: usize,
    /// Height in characters (rows).
    pub height: usize,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![' '; width * height],
            width,
            height,
        }
    }

    /// Set the character at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        self.cells[y * self.width + x] = ch;
    }

    /// Get the character at column `x`, row `y`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_pixels() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(2, 1, (10, 20, 30));
        assert_eq!(fb.pixel(2, 1), (10, 20, 30));
        assert_eq!(fb.pixel(0, 0), (0, 0, 0));
        // hors limites : no-op
        fb.set_pixel(3, 0, (1, 1, 1));
        assert_eq!(fb.data.iter().filter(|&&b| b == 1).count(), 0);
    }

    #[test]
    fn crop_square_copies_region() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel(2, 3, (7, 8, 9));
        let tile = fb.crop_square(2, 2, 2);
        assert_eq!(tile.pixel(0, 1), (7, 8, 9));
        assert_eq!(tile.pixel(1, 0), (0, 0, 0));
    }

    #[test]
    fn crop_square_truncates_at_edges() {
        let fb = FrameBuffer::new(5, 3);
        let tile = fb.crop_square(4, 2, 2);
        assert_eq!((tile.width, tile.height), (1, 1));
        assert_eq!(tile.data.len(), 3);
    }

    #[test]
    fn grid_rows_and_display() {
        let mut grid = AsciiGrid::new(2, 2);
        grid.set(0, 0, 'a');
        grid.set(1, 1, 'b');
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["a ".to_string(), " b".to_string()]);
        assert_eq!(grid.to_string(), "a \n b");
    }
}
