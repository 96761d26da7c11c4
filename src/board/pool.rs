//! Tile pool discovery and uniform sampling without replacement

use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{GenerationError, Result, fs_error};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Immutable set of tile image paths available for board cells
///
/// The pool excludes the designated center tile, which is held separately and
/// always placed at the exact center cell of every board. The pool is read
/// once at startup and never changes for the duration of a run.
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: Vec<PathBuf>,
    center: PathBuf,
}

fn is_tile_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

impl TilePool {
    /// Scan a directory for tile images, holding out the center tile
    ///
    /// Admits `png`/`jpg`/`jpeg` files (case-insensitive) and sorts them so
    /// pool order is stable across runs. The center filename is compared
    /// case-insensitively and never enters the pool.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MissingCenterTile`] if the center tile file
    /// does not exist, or [`GenerationError::FileSystem`] if the directory
    /// cannot be read.
    pub fn from_directory(directory: &Path, center_file: &str) -> Result<Self> {
        let center = directory.join(center_file);
        if !center.is_file() {
            return Err(GenerationError::MissingCenterTile { path: center });
        }

        let mut tiles = Vec::new();
        let entries = std::fs::read_dir(directory)
            .map_err(|e| fs_error(directory, "read directory", e))?;
        for entry in entries {
            let path = entry
                .map_err(|e| fs_error(directory, "read directory entry", e))?
                .path();
            if !path.is_file() || !is_tile_image(&path) {
                continue;
            }
            let is_center = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.eq_ignore_ascii_case(center_file));
            if !is_center {
                tiles.push(path);
            }
        }
        tiles.sort();

        Ok(Self { tiles, center })
    }

    /// Build a pool from explicit paths, bypassing directory discovery
    pub fn from_parts(tiles: Vec<PathBuf>, center: PathBuf) -> Self {
        Self { tiles, center }
    }

    /// Ensure the pool can fill `required` non-center cells
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InsufficientPool`] if the pool is smaller
    /// than the requirement.
    pub fn validate(&self, required: usize) -> Result<()> {
        if self.tiles.len() < required {
            return Err(GenerationError::InsufficientPool {
                available: self.tiles.len(),
                required,
            });
        }
        Ok(())
    }

    /// Draw `count` distinct tile paths uniformly at random
    ///
    /// Sampling is without replacement, so distinctness within the draw is
    /// guaranteed by construction rather than re-verified afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InsufficientPool`] if `count` exceeds the
    /// pool size.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<&Path>> {
        self.validate(count)?;
        let indices = rand::seq::index::sample(rng, self.tiles.len(), count);
        Ok(indices
            .into_iter()
            .filter_map(|i| self.tiles.get(i).map(PathBuf::as_path))
            .collect())
    }

    /// All tile paths in the pool, sorted
    pub fn tiles(&self) -> &[PathBuf] {
        &self.tiles
    }

    /// Path of the fixed center tile
    pub fn center(&self) -> &Path {
        &self.center
    }

    /// Number of tiles in the pool (excluding the center tile)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// File names of all pool tiles, for the front-end manifest
    pub fn file_names(&self) -> Vec<String> {
        self.tiles
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}
