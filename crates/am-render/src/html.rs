use std::path::Path;

use am_core::frame::AsciiGrid;
use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, html};

const CSS: &str = "body { background: #fff; margin: 0; } \
pre { line-height: 1; letter-spacing: 0.2em; margin: 1em; }";

/// Page HTML autonome contenant la grille dans un `<pre>`.
///
/// Le contenu est échappé par maud (`<`, `&`, ... restent lisibles).
///
/// # Example
/// ```
/// use am_core::frame::AsciiGrid;
/// use am_render::html::render_page;
/// let mut grid = AsciiGrid::new(1, 1);
/// grid.set(0, 0, '<');
/// let page = render_page(&grid, "Courier New").into_string();
/// assert!(page.contains("&lt;"));
/// ```
#[must_use]
pub fn render_page(grid: &AsciiGrid, font: &str) -> Markup {
    let style = format!("font-family: '{font}', monospace;");
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "ASCII art" }
                style { (CSS) }
            }
            body {
                pre style=(style) {
                    @for row in grid.rows() {
                        (row.iter().collect::<String>()) "\n"
                    }
                }
            }
        }
    }
}

/// Écrit la page HTML de `grid` dans `path`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_page(grid: &AsciiGrid, path: &Path, font: &str) -> Result<()> {
    let page = render_page(grid, font).into_string();
    std::fs::write(path, page)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!("Page HTML écrite : {}", path.display());
    Ok(())
}
