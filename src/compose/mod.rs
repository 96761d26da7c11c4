//! Image composition: tile flattening, board canvas, and print template

/// Board canvas layout and assembly
pub mod canvas;
/// Print template rendering, installation, and board merging
pub mod template;
/// Tile loading and transparency flattening
pub mod tile;

pub use canvas::{BoardLayout, compose_board};
