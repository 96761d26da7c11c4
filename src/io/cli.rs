//! Command-line interface and run pipeline
//!
//! The pipeline follows the operator workflow end to end: emit the tile
//! manifest, resolve the card count, clear prior outputs, generate unique
//! boards, install the print template, merge boards onto it, and assemble the
//! final multipage PDF.

use crate::board::generator::{BoardGenerator, DirectoryStore, GeneratorConfig};
use crate::board::pool::TilePool;
use crate::compose::template::{
    TemplateSpec, TemplateStatus, install_template, load_template, merge_directory,
};
use crate::io::configuration::{
    CARDS_PER_PAGE, DEFAULT_BACKUP_DIR, DEFAULT_BOARD_DIR, DEFAULT_CENTER_FILE, DEFAULT_DPI,
    DEFAULT_GRID_SIZE, DEFAULT_MANIFEST_FILE, DEFAULT_MERGED_DIR, DEFAULT_PDF_FILE,
    DEFAULT_TEMPLATE_FILE, DEFAULT_TILE_DIR, DEFAULT_TILE_SIZE, MANIFEST_VARIABLE,
};
use crate::io::error::{Result, fs_error};
use crate::io::manifest::write_manifest;
use crate::io::pdf::assemble_pdf;
use crate::io::progress::ProgressManager;
use crate::io::prompt::{AssumeYes, Prompter, console};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;

#[derive(Parser)]
#[command(name = "bingotiles")]
#[command(
    author,
    version,
    about = "Generate printable sheets of unique bingo cards from a tile image pool"
)]
/// Command-line arguments for the bingo card generator
pub struct Cli {
    /// Directory containing the tile image pool
    #[arg(long, default_value = DEFAULT_TILE_DIR, value_name = "DIR")]
    pub tiles: std::path::PathBuf,

    /// Filename of the fixed center tile inside the tile directory
    #[arg(long, default_value = DEFAULT_CENTER_FILE, value_name = "FILE")]
    pub center: String,

    /// Output directory for raw generated boards
    #[arg(long, default_value = DEFAULT_BOARD_DIR, value_name = "DIR")]
    pub boards: std::path::PathBuf,

    /// Output directory for boards merged onto the template
    #[arg(long, default_value = DEFAULT_MERGED_DIR, value_name = "DIR")]
    pub merged: std::path::PathBuf,

    /// Path of the editable print template
    #[arg(long, default_value = DEFAULT_TEMPLATE_FILE, value_name = "FILE")]
    pub template: std::path::PathBuf,

    /// Directory receiving timestamped template backups
    #[arg(long, default_value = DEFAULT_BACKUP_DIR, value_name = "DIR")]
    pub backups: std::path::PathBuf,

    /// Path of the assembled multipage PDF
    #[arg(long, default_value = DEFAULT_PDF_FILE, value_name = "FILE")]
    pub pdf: std::path::PathBuf,

    /// Path of the emitted tile manifest
    #[arg(long, default_value = DEFAULT_MANIFEST_FILE, value_name = "FILE")]
    pub manifest: std::path::PathBuf,

    /// Number of unique cards to generate (prompted for when omitted)
    #[arg(short = 'n', long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub cards: Option<u32>,

    /// Number of cells per board side
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_name = "N")]
    pub grid_size: u32,

    /// Tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, value_name = "PX")]
    pub tile_size: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Per-board attempt bound before giving up (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u64>,

    /// Keep existing files in the output directories
    #[arg(short, long)]
    pub keep: bool,

    /// Answer yes to every confirmation (requires --cards)
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates the full manifest → boards → template → merge → PDF run
pub struct Pipeline {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl Pipeline {
    /// Create a pipeline from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = (!cli.quiet).then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Run the pipeline to completion
    ///
    /// # Errors
    ///
    /// Returns an error on fatal configuration problems (missing center tile,
    /// insufficient pool), I/O failures, or an exhausted retry bound.
    pub fn run(&mut self) -> Result<()> {
        let mut prompter: Box<dyn Prompter> = if self.cli.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(console())
        };

        let pool = TilePool::from_directory(&self.cli.tiles, &self.cli.center)?;
        self.emit_manifest(&pool)?;

        let cards = self.resolve_card_count(prompter.as_mut())?;

        if !self.cli.keep {
            self.clear_outputs()?;
        }

        self.generate_boards(pool, cards)?;

        if !self.prepare_template(prompter.as_mut())? {
            return Ok(());
        }

        self.merge_boards()?;
        self.export_pdf(prompter.as_mut())
    }

    fn emit_manifest(&self, pool: &TilePool) -> Result<()> {
        if pool.is_empty() {
            self.say(&format!(
                "No image files found in '{}'.",
                self.cli.tiles.display()
            ));
            return Ok(());
        }
        write_manifest(pool, &self.cli.manifest, MANIFEST_VARIABLE)?;
        self.say(&format!(
            "Tile manifest saved to '{}'.",
            self.cli.manifest.display()
        ));
        Ok(())
    }

    // Quarter sheets print 2x2, so the count is rounded up to fill whole pages
    fn resolve_card_count(&self, prompter: &mut dyn Prompter) -> Result<u32> {
        let requested = match self.cli.cards {
            Some(count) => count,
            None => prompter
                .positive_integer("Enter the number of unique bingo cards to generate: ")?,
        };
        let cards = round_up_to_page(requested);
        if cards != requested {
            self.say(&format!(
                "Filling out a page with quarter sheets... Generating {cards} bingo cards."
            ));
        }
        Ok(cards)
    }

    fn clear_outputs(&self) -> Result<()> {
        for directory in [&self.cli.boards, &self.cli.merged] {
            let removed = clear_directory(directory)?;
            if removed > 0 {
                self.say(&format!(
                    "Deleted {removed} file(s) in directory '{}'.",
                    directory.display()
                ));
            }
        }
        Ok(())
    }

    fn generate_boards(&mut self, pool: TilePool, cards: u32) -> Result<()> {
        let config = GeneratorConfig {
            grid_size: self.cli.grid_size,
            tile_size: self.cli.tile_size,
            target: cards as usize,
            max_attempts: self.cli.max_attempts,
        };
        let rng = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut generator = BoardGenerator::new(pool, config, rng)?;
        let mut store = DirectoryStore::open(&self.cli.boards)?;

        if let Some(ref mut pm) = self.progress {
            pm.start_phase("Generating boards", u64::from(cards));
        }
        for _ in 0..cards {
            generator.produce_next(&mut store)?;
            if let Some(ref pm) = self.progress {
                pm.advance();
                pm.note_collisions(generator.collisions());
            }
        }
        if let Some(ref mut pm) = self.progress {
            pm.finish_phase();
        }

        self.say(&format!(
            "Generated {} unique boards into '{}' ({} collisions retried).",
            generator.produced(),
            self.cli.boards.display(),
            generator.collisions()
        ));
        Ok(())
    }

    // Returns false when the operator wants to edit the template before merging
    fn prepare_template(&self, prompter: &mut dyn Prompter) -> Result<bool> {
        let status = install_template(
            &self.cli.template,
            &self.cli.backups,
            &TemplateSpec::default(),
            prompter,
        )?;
        match status {
            TemplateStatus::Installed => {
                self.say(&format!(
                    "Board template saved as '{}'. Please review and edit it as needed.",
                    self.cli.template.display()
                ));
            }
            TemplateStatus::Unchanged => {
                self.say("Default template already generated.");
            }
            TemplateStatus::Replaced { backup } => {
                self.say(&format!(
                    "Existing template moved to backup: '{}'.",
                    backup.display()
                ));
                self.say(&format!(
                    "Board template saved as '{}'.",
                    self.cli.template.display()
                ));
            }
            TemplateStatus::Declined => {
                self.say("Template generation canceled.");
            }
        }

        self.say(&format!(
            "Edit '{}' as needed and keep a copy of it somewhere else before proceeding.",
            self.cli.template.display()
        ));
        let finalized = prompter.confirm("Have you finalized editing the template?")?;
        if !finalized {
            self.say("Please edit the template and run again.");
        }
        Ok(finalized)
    }

    fn merge_boards(&self) -> Result<()> {
        let template = load_template(&self.cli.template)?;
        let merged = merge_directory(&self.cli.boards, &self.cli.merged, &template)?;
        self.say(&format!(
            "Merged {} board(s) with the template into '{}'.",
            merged.len(),
            self.cli.merged.display()
        ));
        Ok(())
    }

    fn export_pdf(&self, prompter: &mut dyn Prompter) -> Result<()> {
        let pages = assemble_pdf(
            &self.cli.merged,
            &self.cli.pdf,
            f64::from(DEFAULT_DPI),
            prompter,
        )?;
        if pages == 0 {
            self.say(&format!(
                "No images found in '{}'. Please check the input folder.",
                self.cli.merged.display()
            ));
            return Ok(());
        }
        self.say(&format!(
            "PDF created successfully: '{}'.",
            self.cli.pdf.display()
        ));
        self.say("Remember to print in 2x2 configuration!");
        self.say(&format!(
            "There should be {} pages to print.",
            pages / CARDS_PER_PAGE as usize
        ));
        Ok(())
    }

    // Allow print for user feedback in an interactive tool
    #[allow(clippy::print_stdout)]
    fn say(&self, message: &str) {
        if !self.cli.quiet {
            println!("{message}");
        }
    }
}

/// Round a positive card count up to fill whole 2x2 quarter-sheet pages
///
/// Counts are validated as positive before they reach this point, both on the
/// command line and at the prompt.
pub const fn round_up_to_page(cards: u32) -> u32 {
    cards.next_multiple_of(CARDS_PER_PAGE)
}

/// Remove all regular files directly inside a directory
///
/// Missing directories are treated as already clear. Subdirectories are left
/// untouched.
///
/// # Errors
///
/// Returns [`crate::GenerationError::FileSystem`] if the directory cannot be
/// read or a file cannot be removed.
pub fn clear_directory(directory: &Path) -> Result<usize> {
    if !directory.exists() {
        return Ok(0);
    }
    let mut removed = 0;
    let entries =
        std::fs::read_dir(directory).map_err(|e| fs_error(directory, "read directory", e))?;
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(directory, "read directory entry", e))?
            .path();
        if path.is_file() {
            std::fs::remove_file(&path).map_err(|e| fs_error(&path, "remove file", e))?;
            removed += 1;
        }
    }
    Ok(removed)
}
