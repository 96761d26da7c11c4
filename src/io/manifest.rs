//! Script-loadable tile manifest emission
//!
//! An external front-end consumes the list of available tile filenames as a
//! JavaScript array literal assigned to a well-known variable. The center tile
//! is never listed; the pool already excludes it.

use crate::board::pool::TilePool;
use crate::io::error::{Result, fs_error};
use std::path::Path;

/// Render the manifest source text for the given tile filenames
pub fn render_manifest(names: &[String], variable: &str) -> String {
    let array =
        serde_json::to_string_pretty(names).unwrap_or_else(|_| "[]".to_string());
    format!("var {variable} = {array};\n")
}

/// Write the pool's tile filenames as a script-loadable array
///
/// # Errors
///
/// Returns [`crate::GenerationError::FileSystem`] if the manifest file cannot
/// be written.
pub fn write_manifest(pool: &TilePool, path: &Path, variable: &str) -> Result<()> {
    let content = render_manifest(&pool.file_names(), variable);
    std::fs::write(path, content).map_err(|e| fs_error(path, "write", e))
}
