use am_core::error::CoreError;
use am_core::frame::FrameBuffer;
use am_core::traits::ImageSource;

/// Poids perceptuels BT.709, ×10000 pour un cumul entier exact.
const RED_WEIGHT: u64 = 2126;
const GREEN_WEIGHT: u64 = 7152;
const BLUE_WEIGHT: u64 = 722;
const WEIGHT_SCALE: u64 = 10_000;

/// Square tile of the padded image, with its grid coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Output row.
    pub row: usize,
    /// Output column.
    pub col: usize,
    /// Pixel content (side × side).
    pub pixels: FrameBuffer,
}

/// Row-major partition of an image into equal square tiles.
#[derive(Clone, Debug)]
pub struct TileGrid {
    /// Tile edge in pixels.
    pub side: u32,
    /// Number of tile rows (the resolution).
    pub rows: usize,
    /// Number of tile columns.
    pub cols: usize,
    /// Tiles, row-major.
    pub tiles: Vec<Tile>,
}

impl TileGrid {
    /// Partition `frame` into `resolution` rows of square tiles of edge
    /// `frame.height / resolution`; columns = `frame.width / edge`.
    ///
    /// Pixels beyond the last full tile on the right or bottom are dropped.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if `resolution` is 0 or exceeds the
    /// frame height (tile edge would be 0).
    ///
    /// # Example
    /// ```
    /// use am_core::frame::FrameBuffer;
    /// use am_source::tiles::TileGrid;
    /// let grid = TileGrid::partition(&FrameBuffer::new(8, 4), 2).unwrap();
    /// assert_eq!((grid.side, grid.rows, grid.cols), (2, 2, 4));
    /// assert_eq!(grid.tiles.len(), 8);
    /// ```
    pub fn partition(frame: &FrameBuffer, resolution: u32) -> Result<Self, CoreError> {
        if resolution == 0 || resolution > frame.height {
            return Err(CoreError::InvalidDimensions {
                width: frame.width,
                height: resolution,
            });
        }
        let side = frame.height / resolution;
        let rows = resolution as usize;
        let cols = (frame.width / side) as usize;

        let mut tiles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Tile {
                    row,
                    col,
                    pixels: frame.crop_square(col as u32 * side, row as u32 * side, side),
                });
            }
        }
        Ok(Self {
            side,
            rows,
            cols,
            tiles,
        })
    }
}

/// Mean perceptual luminance of `image` in [0, 1].
///
/// Σ (2126·R + 7152·G + 722·B) / (pixels × 255 × 10000), accumulated in
/// integers so that white is exactly 1 and black exactly 0. An empty image is 0.
///
/// # Example
/// ```
/// use am_core::frame::FrameBuffer;
/// use am_source::tiles::luminance;
/// assert_eq!(luminance(&FrameBuffer::new(2, 2)), 0.0);
/// assert_eq!(luminance(&FrameBuffer::filled(2, 2, (255, 255, 255))), 1.0);
/// ```
#[must_use]
pub fn luminance<S: ImageSource + ?Sized>(image: &S) -> f64 {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return 0.0;
    }
    let count = u64::from(width) * u64::from(height);
    let mut sum: u64 = 0;
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = image.pixel(x, y);
            sum += u64::from(r) * RED_WEIGHT
                + u64::from(g) * GREEN_WEIGHT
                + u64::from(b) * BLUE_WEIGHT;
        }
    }
    sum as f64 / (count * 255 * WEIGHT_SCALE) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_row_major_order() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.set_pixel(2, 0, (255, 255, 255));
        let grid = TileGrid::partition(&frame, 2).unwrap();
        let coords: Vec<(usize, usize)> = grid.tiles.iter().map(|t| (t.row, t.col)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.tiles[1].pixels.pixel(0, 0), (255, 255, 255));
    }

    #[test]
    fn partition_rejects_zero_and_oversized_resolution() {
        let frame = FrameBuffer::new(4, 4);
        assert!(TileGrid::partition(&frame, 0).is_err());
        assert!(TileGrid::partition(&frame, 5).is_err());
        assert!(TileGrid::partition(&frame, 4).is_ok());
    }

    #[test]
    fn partition_non_divisible_height_drops_remainder() {
        let frame = FrameBuffer::new(8, 8);
        let grid = TileGrid::partition(&frame, 3).unwrap();
        assert_eq!(grid.side, 2);
        assert_eq!((grid.rows, grid.cols), (3, 4));
        assert!(grid.tiles.iter().all(|t| t.pixels.width == 2 && t.pixels.height == 2));
    }

    #[test]
    fn luminance_extremes_are_exact() {
        for side in [1, 2, 3, 7, 64] {
            let white = FrameBuffer::filled(side, side, (255, 255, 255));
            let black = FrameBuffer::filled(side, side, (0, 0, 0));
            assert_eq!(luminance(&white), 1.0, "{side}×{side}");
            assert_eq!(luminance(&black), 0.0, "{side}×{side}");
        }
    }

    #[test]
    fn luminance_weights() {
        let red = luminance(&FrameBuffer::filled(1, 1, (255, 0, 0)));
        let green = luminance(&FrameBuffer::filled(1, 1, (0, 255, 0)));
        let blue = luminance(&FrameBuffer::filled(1, 1, (0, 0, 255)));
        assert!((red - 0.2126).abs() < 1e-9);
        assert!((green - 0.7152).abs() < 1e-9);
        assert!((blue - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn luminance_is_mean_over_tile() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.set_pixel(0, 0, (255, 255, 255));
        assert!((luminance(&frame) - 0.5).abs() < 1e-9);
    }
}
