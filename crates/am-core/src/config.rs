use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset;
use crate::error::CoreError;

/// Configuration complète du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use am_core::config::{RenderConfig, RoundingMode};
/// let config = RenderConfig::default();
/// assert_eq!(config.resolution, 2);
/// assert_eq!(config.rounding, RoundingMode::Nearest);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Palette initiale (caractères imprimables uniquement).
    pub charset: String,
    /// Nombre de lignes de la grille de sortie.
    pub resolution: u32,
    /// Politique de sélection de clé de luminosité.
    pub rounding: RoundingMode,
    /// Sortie active.
    pub output: OutputKind,
    /// Fichier écrit par la sortie HTML.
    pub html_path: PathBuf,
    /// Police CSS de la sortie HTML.
    pub html_font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: charset::CHARSET_DIGITS.to_string(),
            resolution: 2,
            rounding: RoundingMode::Nearest,
            output: OutputKind::Console,
            html_path: PathBuf::from("out.html"),
            html_font: "Courier New".to_string(),
        }
    }
}

impl RenderConfig {
    /// Clamp numeric fields and drop non-printable charset characters.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.resolution = self.resolution.max(1);
        let before = self.charset.chars().count();
        self.charset.retain(charset::is_printable);
        let dropped = before - self.charset.chars().count();
        if dropped > 0 {
            log::warn!("{dropped} caractère(s) non imprimable(s) retiré(s) du charset");
        }
    }

    /// Initial palette characters, in configuration order.
    #[must_use]
    pub fn initial_chars(&self) -> Vec<char> {
        self.charset.chars().collect()
    }
}

/// Selection policy between the two keys bracketing a tile brightness.
///
/// # Example
/// ```
/// use am_core::config::RoundingMode;
/// let mode: RoundingMode = "ceiling".parse().unwrap();
/// assert_eq!(mode, RoundingMode::Ceiling);
/// assert!("sideways".parse::<RoundingMode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Greatest key ≤ value, falling back to the upper key.
    Floor,
    /// Smallest key ≥ value, falling back to the lower key.
    Ceiling,
    /// Closest key by absolute distance, ties toward the lower key.
    #[default]
    Nearest,
}

impl RoundingMode {
    /// Canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
            Self::Nearest => "nearest",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(Self::Floor),
            "ceiling" => Ok(Self::Ceiling),
            "nearest" => Ok(Self::Nearest),
            other => Err(CoreError::UnknownRounding(other.to_string())),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output surface for a finished grid.
///
/// # Example
/// ```
/// use am_core::config::OutputKind;
/// assert_eq!("html".parse::<OutputKind>().unwrap(), OutputKind::Html);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Texte brut sur la sortie standard.
    #[default]
    Console,
    /// Page HTML contenant la grille.
    Html,
}

impl FromStr for OutputKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Self::Console),
            "html" => Ok(Self::Html),
            other => Err(CoreError::UnknownOutput(other.to_string())),
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    charset: Option<String>,
    resolution: Option<u32>,
    rounding: Option<RoundingMode>,
    output: Option<OutputKind>,
    html_path: Option<PathBuf>,
    html_font: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// `charset` accepts a preset name (see [`charset::resolve_charset`]).
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use am_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .map_err(|e| CoreError::Config(e.message().to_owned()))
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.charset {
            config.charset = charset::resolve_charset(&v);
        }
        if let Some(v) = r.resolution {
            config.resolution = v;
        }
        if let Some(v) = r.rounding {
            config.rounding = v;
        }
        if let Some(v) = r.output {
            config.output = v;
        }
        if let Some(v) = r.html_path {
            config.html_path = v;
        }
        if let Some(v) = r.html_font {
            config.html_font = v;
        }
    }

    config.clamp_all();
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
