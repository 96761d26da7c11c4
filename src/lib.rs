//! Printable bingo card sheet generation with content-level board deduplication
//!
//! The system composes randomly chosen tile images into square boards with a
//! fixed center tile, hashes the final pixel data to reject duplicate boards,
//! overlays each board onto a print template, and emits a multipage PDF.

#![forbid(unsafe_code)]

/// Core board generation: tile pool, dedup store, and the retry loop
pub mod board;
/// Image composition: tile flattening, board canvas, and print template
pub mod compose;
/// Input/output operations, CLI pipeline, and error handling
pub mod io;

pub use io::error::{GenerationError, Result};
