//! Deduplicated random board generation
//!
//! The generator composes candidate boards from random tile samples, hashes
//! the final pixel data, and retries on hash collision until a fresh board is
//! persisted. Collisions are an ordinary control path, not an error; with the
//! intended pool sizes they are statistically negligible.

use crate::board::pool::TilePool;
use crate::compose::canvas::{BoardLayout, compose_board};
use crate::compose::tile::load_tile;
use crate::io::configuration::{BOARD_FILE_EXTENSION, BOARD_FILE_PREFIX};
use crate::io::error::{GenerationError, Result, fs_error};
use image::RgbImage;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Parameters controlling a generation run
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Number of cells per board side
    pub grid_size: u32,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Number of unique boards to produce
    pub target: usize,
    /// Per-board attempt bound; `None` retries indefinitely
    pub max_attempts: Option<u64>,
}

/// Content digest of a board's final pixel data, used as its dedup identity
pub fn board_hash(image: &RgbImage) -> String {
    blake3::hash(image.as_raw()).to_hex().to_string()
}

/// Filename a board with the given hash is persisted under
pub fn board_file_name(hash: &str) -> String {
    format!("{BOARD_FILE_PREFIX}{hash}.{BOARD_FILE_EXTENSION}")
}

/// Destination for persisted boards and the set of hashes already produced
///
/// Owns the Generated Set: hashes recorded this run plus whatever identity the
/// backing medium already holds. Modeling this as a trait keeps the generator
/// free of ambient filesystem state and lets tests substitute an in-memory
/// store.
pub trait BoardStore {
    /// Whether a board with this hash has already been persisted
    fn contains(&self, hash: &str) -> bool;

    /// Persist a fresh board under its hash-derived name
    ///
    /// Must never overwrite an existing board; callers check [`Self::contains`]
    /// first, and the hash-derived naming makes an accidental clash a content
    /// duplicate by definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be written.
    fn persist(&mut self, hash: &str, image: &RgbImage) -> Result<PathBuf>;
}

/// Filesystem-backed board store
///
/// A hash is considered present if it was recorded this run or if a file with
/// its derived name already exists in the output directory, so re-running
/// against a populated directory is additive and never overwrites.
#[derive(Debug)]
pub struct DirectoryStore {
    directory: PathBuf,
    known: HashSet<String>,
}

impl DirectoryStore {
    /// Open a store over the given directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::FileSystem`] if the directory cannot be
    /// created.
    pub fn open(directory: &Path) -> Result<Self> {
        std::fs::create_dir_all(directory)
            .map_err(|e| fs_error(directory, "create directory", e))?;
        Ok(Self {
            directory: directory.to_path_buf(),
            known: HashSet::new(),
        })
    }

    /// Path a board with this hash would be persisted at
    pub fn board_path(&self, hash: &str) -> PathBuf {
        self.directory.join(board_file_name(hash))
    }
}

impl BoardStore for DirectoryStore {
    fn contains(&self, hash: &str) -> bool {
        self.known.contains(hash) || self.board_path(hash).exists()
    }

    fn persist(&mut self, hash: &str, image: &RgbImage) -> Result<PathBuf> {
        let path = self.board_path(hash);
        image.save(&path).map_err(|e| GenerationError::ImageExport {
            path: path.clone(),
            source: e,
        })?;
        self.known.insert(hash.to_string());
        Ok(path)
    }
}

/// A board that was composed, hashed fresh, and persisted
#[derive(Debug, Clone)]
pub struct ProducedBoard {
    /// Location the board was written to
    pub path: PathBuf,
    /// The board's content hash
    pub hash: String,
}

/// Composes candidate boards and persists the content-distinct ones
///
/// The random source is injected so tests can drive the sampling
/// deterministically. Decoded tiles are cached per path for the run; the pool
/// is immutable, so a tile never needs re-decoding.
pub struct BoardGenerator<R: Rng> {
    pool: TilePool,
    layout: BoardLayout,
    target: usize,
    max_attempts: Option<u64>,
    rng: R,
    center: RgbImage,
    tile_cache: HashMap<PathBuf, RgbImage>,
    produced: usize,
    attempts: u64,
    collisions: u64,
}

impl<R: Rng> BoardGenerator<R> {
    /// Validate preconditions and load the center tile
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InsufficientPool`] if the pool cannot fill
    /// the non-center cells, or [`GenerationError::ImageLoad`] if the center
    /// tile cannot be decoded. Both abort the run; neither is retried.
    pub fn new(pool: TilePool, config: GeneratorConfig, rng: R) -> Result<Self> {
        let layout = BoardLayout::new(config.grid_size, config.tile_size);
        pool.validate(layout.pool_requirement())?;
        let center = load_tile(pool.center(), config.tile_size)?;
        Ok(Self {
            pool,
            layout,
            target: config.target,
            max_attempts: config.max_attempts,
            rng,
            center,
            tile_cache: HashMap::new(),
            produced: 0,
            attempts: 0,
            collisions: 0,
        })
    }

    /// Compose, hash, and persist the next content-distinct board
    ///
    /// Retries internally on hash collision. With the default unbounded
    /// attempt limit this loops until a fresh board is found; an adversarial
    /// pool with too few distinguishable combinations can make that take
    /// arbitrarily long.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::RetriesExhausted`] if a configured attempt
    /// bound is consumed without finding a fresh board, or an I/O error if
    /// composition or persistence fails.
    pub fn produce_next(&mut self, store: &mut dyn BoardStore) -> Result<ProducedBoard> {
        let mut board_attempts: u64 = 0;
        loop {
            board_attempts += 1;
            self.attempts += 1;

            let board = self.compose_candidate()?;
            let hash = board_hash(&board);

            if store.contains(&hash) {
                // Expected control path: discard and resample
                self.collisions += 1;
                if self.max_attempts.is_some_and(|limit| board_attempts >= limit) {
                    return Err(GenerationError::RetriesExhausted {
                        attempts: board_attempts,
                        produced: self.produced,
                        target: self.target,
                    });
                }
                continue;
            }

            let path = store.persist(&hash, &board)?;
            self.produced += 1;
            return Ok(ProducedBoard { path, hash });
        }
    }

    /// Compose one candidate board from a fresh random sample
    ///
    /// # Errors
    ///
    /// Returns an error if a sampled tile cannot be decoded.
    pub fn compose_candidate(&mut self) -> Result<RgbImage> {
        let sampled: Vec<PathBuf> = self
            .pool
            .sample(&mut self.rng, self.layout.pool_requirement())?
            .into_iter()
            .map(Path::to_path_buf)
            .collect();

        for path in &sampled {
            if !self.tile_cache.contains_key(path) {
                let tile = load_tile(path, self.layout.tile_size)?;
                self.tile_cache.insert(path.clone(), tile);
            }
        }

        let tiles: Vec<&RgbImage> = sampled
            .iter()
            .filter_map(|path| self.tile_cache.get(path))
            .collect();

        compose_board(self.layout, &self.center, &tiles)
    }

    /// Number of boards still to produce for this run
    pub const fn remaining(&self) -> usize {
        self.target.saturating_sub(self.produced)
    }

    /// Boards persisted so far
    pub const fn produced(&self) -> usize {
        self.produced
    }

    /// Total composition attempts, including collisions
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Attempts discarded because their hash was already present
    pub const fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Layout geometry for this run
    pub const fn layout(&self) -> BoardLayout {
        self.layout
    }
}
