/// Brightness-to-character matching engine for asciimatch.
///
/// Glyph brightness, the normalized character palette, rounding policies
/// and the tile-to-grid orchestrator.

pub mod algorithm;
pub mod glyph;
pub mod palette;
pub mod rounding;

pub use algorithm::ArtAlgorithm;
pub use palette::CharacterPalette;
