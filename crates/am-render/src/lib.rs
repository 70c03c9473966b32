/// Grid sinks for asciimatch: plain text and HTML.

pub mod console;
pub mod html;

use std::io::Write;
use std::path::PathBuf;

use am_core::config::{OutputKind, RenderConfig};
use am_core::frame::AsciiGrid;
use anyhow::Result;

/// Destination d'une grille terminée, choisie une fois à la configuration.
///
/// # Example
/// ```
/// use am_core::config::{OutputKind, RenderConfig};
/// use am_render::Renderer;
/// let renderer = Renderer::from_config(OutputKind::Html, &RenderConfig::default());
/// assert_eq!(renderer.name(), "html");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Renderer {
    /// Texte brut sur la sortie standard.
    Console,
    /// Page HTML écrite dans `path`, grille en police `font`.
    Html {
        /// Output file.
        path: PathBuf,
        /// CSS font family.
        font: String,
    },
}

impl Renderer {
    /// Build the renderer of kind `kind`, taking HTML settings from `config`.
    #[must_use]
    pub fn from_config(kind: OutputKind, config: &RenderConfig) -> Self {
        match kind {
            OutputKind::Console => Self::Console,
            OutputKind::Html => Self::Html {
                path: config.html_path.clone(),
                font: config.html_font.clone(),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Html { .. } => "html",
        }
    }

    /// Emit `grid`: text goes to `console`, HTML goes to its file.
    ///
    /// # Errors
    /// Returns an error if the writer or the HTML file cannot be written.
    pub fn out<W: Write>(&self, grid: &AsciiGrid, console: &mut W) -> Result<()> {
        match self {
            Self::Console => {
                console::write_grid(grid, console)?;
                Ok(())
            }
            Self::Html { path, font } => html::write_page(grid, path, font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_renderer_writes_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            html_path: dir.path().join("art.html"),
            ..RenderConfig::default()
        };
        let renderer = Renderer::from_config(OutputKind::Html, &config);
        let mut grid = AsciiGrid::new(1, 1);
        grid.set(0, 0, '#');
        let mut console = Vec::new();
        renderer.out(&grid, &mut console).unwrap();
        assert!(console.is_empty());
        let page = std::fs::read_to_string(dir.path().join("art.html")).unwrap();
        assert!(page.contains('#'));
        assert!(page.contains("Courier New"));
    }

    #[test]
    fn console_is_default_kind() {
        let renderer = Renderer::from_config(OutputKind::default(), &RenderConfig::default());
        assert_eq!(renderer, Renderer::Console);
        assert_eq!(renderer.name(), "console");

        let mut grid = AsciiGrid::new(2, 1);
        grid.set(1, 0, '@');
        let mut console = Vec::new();
        renderer.out(&grid, &mut console).unwrap();
        assert_eq!(console, b" @\n");
    }
}
