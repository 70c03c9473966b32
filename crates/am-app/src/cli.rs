use std::path::{Path, PathBuf};

use am_core::charset;
use am_core::config::{self, OutputKind, RenderConfig, RoundingMode};
use anyhow::{Context, Result};
use clap::Parser;

/// Fichier de configuration chargé s'il existe et si `--config` est absent.
pub const DEFAULT_CONFIG: &str = "config/default.toml";

/// asciimatch — image → ASCII art par luminosité de glyphes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Palette initiale : caractères littéraux ou preset (digits, compact, standard, all).
    #[arg(long)]
    pub charset: Option<String>,

    /// Résolution initiale (lignes de la grille).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Politique d'arrondi : floor, ceiling, nearest.
    #[arg(long)]
    pub round: Option<String>,

    /// Sortie : console, html.
    #[arg(long)]
    pub output: Option<String>,

    /// Écrire l'image paddée (PNG) à ce chemin, pour inspection.
    #[arg(long, value_name = "PNG")]
    pub dump_padded: Option<PathBuf>,

    /// Rendre une fois puis quitter, sans shell interactif.
    #[arg(long, default_value_t = false)]
    pub once: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Load the config file (explicit, else the default path if present,
    /// else built-in defaults), then apply CLI overrides.
    ///
    /// # Errors
    /// Returns an error if an explicit config file is unreadable, or if an
    /// override names an unknown rounding policy or output.
    pub fn resolve_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => {
                config::load_config(Path::new(DEFAULT_CONFIG))?
            }
            None => {
                log::info!("Pas de {DEFAULT_CONFIG}, valeurs par défaut");
                RenderConfig::default()
            }
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Apply `--charset`, `--resolution`, `--round`, `--output` on top of `config`.
    ///
    /// # Errors
    /// Returns an error for an unknown rounding policy or output name.
    pub fn apply_overrides(&self, config: &mut RenderConfig) -> Result<()> {
        if let Some(ref v) = self.charset {
            config.charset = charset::resolve_charset(v);
        }
        if let Some(v) = self.resolution {
            config.resolution = v;
        }
        if let Some(ref v) = self.round {
            config.rounding = v.parse::<RoundingMode>().context("--round")?;
        }
        if let Some(ref v) = self.output {
            config.output = v.parse::<OutputKind>().context("--output")?;
        }
        config.clamp_all();
        Ok(())
    }
}
