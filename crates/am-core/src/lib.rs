/// Configuration, types, and shared structures for asciimatch.
///
/// This crate contains the shared types, traits, and configuration logic
/// used across the asciimatch workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use config::{OutputKind, RenderConfig, RoundingMode};
pub use error::CoreError;
pub use frame::{AsciiGrid, FrameBuffer};
pub use traits::ImageSource;
