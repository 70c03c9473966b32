//! Glyph brightness: fraction of lit cells in a fixed 16×16 bitmap rendering.
use std::convert::Infallible;
use std::sync::OnceLock;

use am_core::charset::{self, PRINTABLE_MIN};
use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_9X15;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};

/// Edge of the glyph cell in pixels.
pub const GLYPH_SIZE: usize = 16;

/// FONT_9X15 centré horizontalement dans la cellule 16×16.
const GLYPH_ORIGIN: Point = Point::new(3, 0);

/// Monochrome glyph bitmap, `[row][col]`.
pub type GlyphBitmap = [[bool; GLYPH_SIZE]; GLYPH_SIZE];

/// Cellule de rendu : reçoit les pixels allumés, ignore le hors-cadre.
struct GlyphCanvas {
    bits: GlyphBitmap,
}

impl OriginDimensions for GlyphCanvas {
    fn size(&self) -> Size {
        Size::new(GLYPH_SIZE as u32, GLYPH_SIZE as u32)
    }
}

impl DrawTarget for GlyphCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < GLYPH_SIZE
                && y < GLYPH_SIZE
            {
                self.bits[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}

/// Render `c` into a 16×16 monochrome bitmap.
///
/// Characters outside the printable range render as an all-off bitmap.
///
/// # Example
/// ```
/// use am_ascii::glyph::render_glyph;
/// let blank = render_glyph(' ');
/// assert!(blank.iter().flatten().all(|lit| !lit));
/// let at = render_glyph('@');
/// assert!(at.iter().flatten().any(|lit| *lit));
/// ```
#[must_use]
pub fn render_glyph(c: char) -> GlyphBitmap {
    let mut canvas = GlyphCanvas {
        bits: [[false; GLYPH_SIZE]; GLYPH_SIZE],
    };
    if !charset::is_printable(c) {
        return canvas.bits;
    }
    let mut buf = [0u8; 4];
    let text = c.encode_utf8(&mut buf);
    let style = MonoTextStyle::new(&FONT_9X15, BinaryColor::On);
    let Ok(_) = Text::with_baseline(text, GLYPH_ORIGIN, style, Baseline::Top).draw(&mut canvas);
    canvas.bits
}

fn compute(c: char) -> f64 {
    let lit = render_glyph(c).iter().flatten().filter(|lit| **lit).count();
    lit as f64 / (GLYPH_SIZE * GLYPH_SIZE) as f64
}

/// Raw brightness of `c` in [0, 1]: lit cells / 256.
///
/// Pure and deterministic; the 95 printable values are computed once.
///
/// # Example
/// ```
/// use am_ascii::glyph::brightness;
/// assert_eq!(brightness(' '), 0.0);
/// assert_eq!(brightness('\n'), 0.0);
/// assert!(brightness('@') > brightness('.'));
/// ```
#[must_use]
pub fn brightness(c: char) -> f64 {
    static TABLE: OnceLock<Vec<f64>> = OnceLock::new();
    if !charset::is_printable(c) {
        return 0.0;
    }
    let table = TABLE.get_or_init(|| charset::all_printable().map(compute).collect());
    let idx = u32::from(c) - u32::from(PRINTABLE_MIN);
    table.get(idx as usize).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_within_unit_range() {
        for c in charset::all_printable() {
            let b = brightness(c);
            assert!((0.0..=1.0).contains(&b), "{c:?} → {b}");
        }
    }

    #[test]
    fn memoized_matches_fresh_render() {
        for c in ['#', 'a', '0', '~'] {
            assert_eq!(brightness(c).to_bits(), compute(c).to_bits());
        }
    }

    #[test]
    fn visible_glyphs_have_ink() {
        for c in charset::all_printable().filter(|c| *c != ' ') {
            assert!(brightness(c) > 0.0, "{c:?} rendered empty");
        }
    }

    #[test]
    fn dense_glyphs_outrank_sparse_ones() {
        assert!(brightness('#') > brightness('-'));
        assert!(brightness('M') > brightness('.'));
        assert!(brightness('@') > brightness(':'));
    }

    #[test]
    fn unprintable_is_dark() {
        assert_eq!(brightness('\u{7f}'), 0.0);
        assert_eq!(brightness('é'), 0.0);
        assert!(render_glyph('\t').iter().flatten().all(|lit| !lit));
    }
}
