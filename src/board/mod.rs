//! Core board generation: tile pool, dedup store, and the retry loop

/// Deduplicated random board generation
pub mod generator;
/// Tile pool discovery and sampling
pub mod pool;

pub use generator::{BoardGenerator, BoardStore, DirectoryStore, GeneratorConfig};
pub use pool::TilePool;
