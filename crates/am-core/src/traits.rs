/// Source de pixels en lecture seule.
///
/// Implémenté par : `FrameBuffer`. Le cœur ne parse jamais de format de
/// fichier lui-même, il ne voit que cette interface.
///
/// # Example
/// ```
/// use am_core::traits::ImageSource;
///
/// struct Checker;
/// impl ImageSource for Checker {
///     fn width(&self) -> u32 { 2 }
///     fn height(&self) -> u32 { 2 }
///     fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
///         if (x + y) % 2 == 0 { (255, 255, 255) } else { (0, 0, 0) }
///     }
/// }
/// assert_eq!(Checker.pixel(1, 0), (0, 0, 0));
/// ```
pub trait ImageSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel at column `x`, row `y` → (r, g, b).
    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8);
}
