use std::collections::HashMap;

use am_core::charset;
use am_core::config::RoundingMode;
use am_core::error::CoreError;
use am_core::frame::{AsciiGrid, FrameBuffer};
use am_source::padding::pad_to_power_of_two;
use am_source::tiles::{TileGrid, luminance};

use crate::palette::CharacterPalette;
use crate::rounding;

/// Image → ASCII orchestrator.
///
/// Owns the source image (and its padded copy), the palette, the active
/// rounding policy, the resolution, and a luminance memo keyed by tile
/// content. Mutations and renders are serialized by `&mut self`.
///
/// # Example
/// ```
/// use am_ascii::ArtAlgorithm;
/// use am_core::config::RoundingMode;
/// use am_core::frame::FrameBuffer;
///
/// let image = FrameBuffer::filled(4, 4, (255, 255, 255));
/// let mut art = ArtAlgorithm::new(image, [' ', '@'], 2, RoundingMode::Nearest);
/// let grid = art.render().unwrap();
/// assert_eq!((grid.width, grid.height), (2, 2));
/// assert!(grid.cells.iter().all(|c| *c == '@'));
/// ```
pub struct ArtAlgorithm {
    image: FrameBuffer,
    padded: FrameBuffer,
    palette: CharacterPalette,
    rounding: RoundingMode,
    resolution: u32,
    luminance_cache: HashMap<FrameBuffer, f64>,
}

impl ArtAlgorithm {
    /// Build the orchestrator.
    ///
    /// Characters outside the printable range are dropped. A `resolution`
    /// outside [`Self::resolution_bounds`] is clamped into them.
    pub fn new(
        image: FrameBuffer,
        chars: impl IntoIterator<Item = char>,
        resolution: u32,
        rounding: RoundingMode,
    ) -> Self {
        let padded = pad_to_power_of_two(&image);
        let palette = CharacterPalette::new(chars.into_iter().filter(|c| {
            let ok = charset::is_printable(*c);
            if !ok {
                log::warn!("Caractère {c:?} hors plage imprimable ignoré");
            }
            ok
        }));
        let mut art = Self {
            image,
            padded,
            palette,
            rounding,
            resolution,
            luminance_cache: HashMap::new(),
        };
        let (min_res, max_res) = art.resolution_bounds();
        // Bornes vides possibles (w > h²) : pas de `clamp`, qui paniquerait.
        let clamped = resolution.max(min_res).min(max_res);
        if clamped != resolution {
            log::warn!("Résolution {resolution} hors bornes [{min_res}, {max_res}] → {clamped}");
        }
        art.resolution = clamped;
        art
    }

    /// Render the image into a grid of `resolution` rows.
    ///
    /// # Errors
    /// [`CoreError::EmptyPalette`] if no character is available; nothing is
    /// computed in that case.
    pub fn render(&mut self) -> Result<AsciiGrid, CoreError> {
        if self.palette.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        let tiles = TileGrid::partition(&self.padded, self.resolution)?;
        let mut grid = AsciiGrid::new(tiles.cols, tiles.rows);
        let mut hits = 0usize;

        for tile in tiles.tiles {
            let value = if let Some(&cached) = self.luminance_cache.get(&tile.pixels) {
                hits += 1;
                cached
            } else {
                let computed = luminance(&tile.pixels);
                self.luminance_cache.insert(tile.pixels, computed);
                computed
            };
            let ch = rounding::char_for_brightness(&self.palette, self.rounding, value)
                .ok_or(CoreError::EmptyPalette)?;
            grid.set(tile.col, tile.row, ch);
        }

        log::info!(
            "Rendu {}×{} (résolution {}, tuile {}px, arrondi {}, cache {hits}/{})",
            grid.width,
            grid.height,
            self.resolution,
            tiles.side,
            self.rounding,
            grid.cells.len()
        );
        Ok(grid)
    }

    /// Add a printable character to the palette. `Ok(false)` if already present.
    ///
    /// # Errors
    /// [`CoreError::UnprintableChar`] outside [32, 126]; the palette is untouched.
    pub fn add_char(&mut self, c: char) -> Result<bool, CoreError> {
        if !charset::is_printable(c) {
            return Err(CoreError::UnprintableChar(c));
        }
        Ok(self.palette.add(c))
    }

    /// Remove a character. `false` if it was absent.
    pub fn remove_char(&mut self, c: char) -> bool {
        self.palette.remove(c)
    }

    /// Switch rounding policy by name (`floor`, `ceiling`, `nearest`).
    ///
    /// # Errors
    /// [`CoreError::UnknownRounding`]; the previous policy stays active.
    pub fn set_rounding(&mut self, name: &str) -> Result<(), CoreError> {
        self.set_rounding_mode(name.parse()?);
        Ok(())
    }

    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        log::debug!("Arrondi : {} → {mode}", self.rounding);
        self.rounding = mode;
    }

    #[must_use]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Palette members, ascending codepoint order.
    #[must_use]
    pub fn current_characters(&self) -> Vec<char> {
        self.palette.snapshot()
    }

    /// Source image padded to power-of-two dimensions, as partitioned by
    /// [`Self::render`].
    #[must_use]
    pub fn padded(&self) -> &FrameBuffer {
        &self.padded
    }

    /// `[max(1, width / height), min(width, height)]` of the source image.
    #[must_use]
    pub fn resolution_bounds(&self) -> (u32, u32) {
        let (w, h) = (self.image.width, self.image.height);
        let min_res = (w / h.max(1)).max(1);
        let max_res = w.min(h).max(1);
        (min_res, max_res)
    }

    /// Multiply the resolution by `factor` (truncated).
    ///
    /// Returns `false` and leaves the resolution unchanged when the result
    /// falls outside [`Self::resolution_bounds`].
    pub fn change_resolution(&mut self, factor: f64) -> bool {
        let target = f64::from(self.resolution) * factor;
        if !target.is_finite() || target < 0.0 || target > f64::from(u32::MAX) {
            log::warn!("Facteur de résolution invalide : {factor}");
            return false;
        }
        self.set_resolution(target as u32)
    }

    /// Set the resolution directly, with the same bounds check as
    /// [`Self::change_resolution`].
    pub fn set_resolution(&mut self, resolution: u32) -> bool {
        let (min_res, max_res) = self.resolution_bounds();
        if (min_res..=max_res).contains(&resolution) {
            self.resolution = resolution;
            true
        } else {
            log::warn!("Résolution {resolution} refusée, bornes [{min_res}, {max_res}]");
            false
        }
    }

    #[must_use]
    pub fn current_resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of distinct tile contents memoized so far.
    #[must_use]
    pub fn cached_tiles(&self) -> usize {
        self.luminance_cache.len()
    }
}
