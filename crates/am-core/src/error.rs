use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file or data format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A render was requested while the palette holds no character.
    #[error("Palette vide : aucun caractère à afficher")]
    EmptyPalette,

    /// Rounding policy name not among `floor`, `ceiling`, `nearest`.
    #[error("Politique d'arrondi inconnue : {0}")]
    UnknownRounding(String),

    /// Output name not among `console`, `html`.
    #[error("Sortie inconnue : {0}")]
    UnknownOutput(String),

    /// Character outside the printable ASCII range [32, 126].
    #[error("Caractère hors plage imprimable : {0:?}")]
    UnprintableChar(char),

    /// Character specification that is neither a char, `all`, `space` nor `a-b`.
    #[error("Spécification de caractères invalide : {0:?}")]
    InvalidCharSpec(String),
}
