/// Image collaborators for asciimatch: decoding, padding, tiling.

pub mod image;
pub mod padding;
pub mod tiles;

pub use padding::pad_to_power_of_two;
pub use tiles::{Tile, TileGrid, luminance};
