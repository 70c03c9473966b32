use am_core::frame::FrameBuffer;
use am_core::traits::ImageSource;

/// Couleur de fond utilisée pour le padding.
pub const BACKGROUND: (u8, u8, u8) = (255, 255, 255);

/// Pad `src` symmetrically with [`BACKGROUND`] so both dimensions become the
/// next power of two ≥ the original.
///
/// Top/left padding is `(new - old) / 2`; the odd remainder goes to the
/// bottom/right.
///
/// # Example
/// ```
/// use am_core::frame::FrameBuffer;
/// use am_source::padding::pad_to_power_of_two;
/// let padded = pad_to_power_of_two(&FrameBuffer::new(5, 3));
/// assert_eq!((padded.width, padded.height), (8, 4));
/// assert_eq!(padded.pixel(0, 0), (255, 255, 255));
/// assert_eq!(padded.pixel(1, 0), (0, 0, 0));
/// ```
#[must_use]
pub fn pad_to_power_of_two<S: ImageSource + ?Sized>(src: &S) -> FrameBuffer {
    let (width, height) = (src.width(), src.height());
    let new_width = width.next_power_of_two();
    let new_height = height.next_power_of_two();
    let left = (new_width - width) / 2;
    let top = (new_height - height) / 2;

    let mut padded = FrameBuffer::filled(new_width, new_height, BACKGROUND);
    for y in 0..height {
        for x in 0..width {
            padded.set_pixel(x + left, y + top, src.pixel(x, y));
        }
    }
    log::debug!("Padding {width}×{height} → {new_width}×{new_height} (offset {left},{top})");
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_is_untouched() {
        let mut src = FrameBuffer::new(4, 2);
        src.set_pixel(3, 1, (1, 2, 3));
        assert_eq!(pad_to_power_of_two(&src), src);
    }

    #[test]
    fn odd_remainder_goes_bottom_right() {
        // 5 → 8 : 1 à gauche, 2 à droite
        let src = FrameBuffer::new(5, 5);
        let padded = pad_to_power_of_two(&src);
        assert_eq!((padded.width, padded.height), (8, 8));
        assert_eq!(padded.pixel(0, 4), BACKGROUND);
        assert_eq!(padded.pixel(1, 1), (0, 0, 0));
        assert_eq!(padded.pixel(5, 5), (0, 0, 0));
        assert_eq!(padded.pixel(6, 5), BACKGROUND);
        assert_eq!(padded.pixel(5, 6), BACKGROUND);
    }

    #[test]
    fn single_pixel_stays_single() {
        let src = FrameBuffer::new(1, 1);
        let padded = pad_to_power_of_two(&src);
        assert_eq!((padded.width, padded.height), (1, 1));
        assert_eq!(padded.pixel(0, 0), (0, 0, 0));
    }
}
