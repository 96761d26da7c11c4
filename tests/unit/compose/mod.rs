pub mod canvas;
pub mod tile;
