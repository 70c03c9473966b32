use std::path::Path;

use am_core::error::CoreError;
use am_core::frame::FrameBuffer;
use anyhow::{Context, Result};

/// Décode une image depuis le disque en `FrameBuffer` RGB.
///
/// Un échec de décodage est fatal pour l'invocation : aucun état partiel.
///
/// # Errors
/// Returns an error if the file is missing, is not PNG/JPEG/BMP/GIF, or
/// cannot be decoded.
///
/// # Example
/// ```no_run
/// use am_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let reader = image::ImageReader::open(path)
        .and_then(image::ImageReader::with_guessed_format)
        .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
    match reader.format() {
        Some(format) if format.reading_enabled() => {}
        other => {
            let format = other.map_or_else(
                || path.extension().unwrap_or_default().to_string_lossy().into_owned(),
                |f| format!("{f:?}"),
            );
            return Err(CoreError::UnsupportedFormat { format }.into());
        }
    }
    let img = reader
        .decode()
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height }.into());
    }
    log::info!("Image chargée : {} ({width}×{height})", path.display());
    Ok(FrameBuffer {
        data: rgb.into_raw(),
        width,
        height,
    })
}

/// Encode un `FrameBuffer` en PNG.
///
/// # Errors
/// Returns an error if the buffer is inconsistent or the file cannot be written.
pub fn save_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let img = image::RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or(CoreError::InvalidDimensions {
            width: frame.width,
            height: frame.height,
        })?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::debug!("Image écrite : {}", path.display());
    Ok(())
}
