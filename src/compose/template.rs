//! Print template rendering, installation, and board merging
//!
//! The template is a quarter letter sheet with a solid black box marking where
//! the board lands. Operators are expected to decorate the template by hand;
//! installation therefore never clobbers an edited template without explicit
//! consent, and the prior file is preserved into a timestamped backup on
//! overwrite.

use crate::compose::tile::flatten_onto_white;
use crate::io::configuration::{
    BACKUP_TIMESTAMP_FORMAT, BOARD_WIDTH_FRACTION, DEFAULT_DPI, TEMPLATE_BACKGROUND,
    TEMPLATE_HEIGHT_IN, TEMPLATE_WIDTH_IN,
};
use crate::io::error::{GenerationError, Result, fs_error};
use crate::io::prompt::Prompter;
use chrono::Local;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, imageops};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Physical dimensions and resolution of the print template
#[derive(Clone, Copy, Debug)]
pub struct TemplateSpec {
    /// Width in inches
    pub width_in: f64,
    /// Height in inches
    pub height_in: f64,
    /// Render resolution in dots per inch
    pub dpi: u32,
}

impl Default for TemplateSpec {
    fn default() -> Self {
        Self {
            width_in: TEMPLATE_WIDTH_IN,
            height_in: TEMPLATE_HEIGHT_IN,
            dpi: DEFAULT_DPI,
        }
    }
}

impl TemplateSpec {
    /// Template dimensions in pixels at the configured resolution
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (
            (self.width_in * f64::from(self.dpi)) as u32,
            (self.height_in * f64::from(self.dpi)) as u32,
        )
    }
}

/// Where the board sits on a template of the given pixel dimensions
///
/// The board is square at 80% of the template width, horizontally centered,
/// with a bottom margin equal to the left margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardRegion {
    /// Left edge of the board
    pub x: u32,
    /// Top edge of the board
    pub y: u32,
    /// Board edge length
    pub extent: u32,
}

/// Compute the board placement for a template of the given dimensions
pub fn board_region(template_width: u32, template_height: u32) -> BoardRegion {
    let extent = (f64::from(template_width) * BOARD_WIDTH_FRACTION) as u32;
    let left_margin = (template_width - extent) / 2;
    let bottom_margin = left_margin;
    BoardRegion {
        x: left_margin,
        y: template_height.saturating_sub(extent + bottom_margin),
        extent,
    }
}

/// Render the default template: gray background, black board placeholder
pub fn render_template(spec: &TemplateSpec) -> RgbImage {
    let (width, height) = spec.pixel_dimensions();
    let mut template = RgbImage::from_pixel(width, height, Rgb(TEMPLATE_BACKGROUND));

    let region = board_region(width, height);
    let x1 = (region.x + region.extent).min(width - 1);
    let y1 = (region.y + region.extent).min(height - 1);
    for y in region.y..=y1 {
        for x in region.x..=x1 {
            template.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    template
}

/// Outcome of a template installation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStatus {
    /// No template existed; the default one was written
    Installed,
    /// The existing template already matches the default; nothing changed
    Unchanged,
    /// The operator consented; the old template was backed up and replaced
    Replaced {
        /// Where the prior template was preserved
        backup: PathBuf,
    },
    /// The operator declined; existing state was left untouched
    Declined,
}

fn encode_png(image: &RgbImage, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| GenerationError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(bytes)
}

/// Install the default template at `path`, gated on operator consent
///
/// An existing template whose content differs from the freshly rendered one is
/// only overwritten if the operator confirms; the prior file is first moved
/// into `backup_dir` under a timestamped name. Identical content is a no-op.
///
/// # Errors
///
/// Returns an error if the template cannot be encoded, compared, backed up, or
/// written, or if the prompt stream fails.
pub fn install_template(
    path: &Path,
    backup_dir: &Path,
    spec: &TemplateSpec,
    prompter: &mut dyn Prompter,
) -> Result<TemplateStatus> {
    let rendered = render_template(spec);
    let bytes = encode_png(&rendered, path)?;

    if path.exists() {
        let existing = std::fs::read(path).map_err(|e| fs_error(path, "read", e))?;
        if blake3::hash(&existing) == blake3::hash(&bytes) {
            return Ok(TemplateStatus::Unchanged);
        }

        let overwrite = prompter.confirm(
            "The newly generated template does not match the existing template. Do you want to overwrite the existing edited template?",
        )?;
        if !overwrite {
            return Ok(TemplateStatus::Declined);
        }

        std::fs::create_dir_all(backup_dir)
            .map_err(|e| fs_error(backup_dir, "create directory", e))?;
        let stem = path
            .file_stem()
            .map_or_else(|| "template".to_string(), |s| s.to_string_lossy().into_owned());
        let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup = backup_dir.join(format!("{stem}_{timestamp}.png"));
        std::fs::rename(path, &backup).map_err(|e| fs_error(path, "move to backup", e))?;
        std::fs::write(path, &bytes).map_err(|e| fs_error(path, "write", e))?;
        return Ok(TemplateStatus::Replaced { backup });
    }

    std::fs::write(path, &bytes).map_err(|e| fs_error(path, "write", e))?;
    Ok(TemplateStatus::Installed)
}

/// Load a template image, flattening any transparency
///
/// # Errors
///
/// Returns [`GenerationError::ImageLoad`] if the file cannot be decoded.
pub fn load_template(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| GenerationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(flatten_onto_white(&decoded))
}

/// Scale a board to the template's board region and paste it in place
pub fn merge_board_onto_template(template: &RgbImage, board: &RgbImage) -> RgbImage {
    let (width, height) = template.dimensions();
    let region = board_region(width, height);
    let resized = DynamicImage::ImageRgb8(board.clone())
        .resize_exact(region.extent, region.extent, FilterType::CatmullRom)
        .to_rgb8();

    let mut merged = template.clone();
    imageops::replace(&mut merged, &resized, i64::from(region.x), i64::from(region.y));
    merged
}

/// Merge every board PNG in `input_dir` onto the template
///
/// Outputs keep their input filenames. Returns the written paths in
/// filename-sorted order.
///
/// # Errors
///
/// Returns an error if the directories cannot be read or created, or if any
/// board cannot be decoded or written.
pub fn merge_directory(
    input_dir: &Path,
    output_dir: &Path,
    template: &RgbImage,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| fs_error(output_dir, "create directory", e))?;

    let mut boards = Vec::new();
    let entries =
        std::fs::read_dir(input_dir).map_err(|e| fs_error(input_dir, "read directory", e))?;
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(input_dir, "read directory entry", e))?
            .path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            boards.push(path);
        }
    }
    boards.sort();

    let mut written = Vec::with_capacity(boards.len());
    for board_path in &boards {
        let board = image::open(board_path)
            .map_err(|e| GenerationError::ImageLoad {
                path: board_path.clone(),
                source: e,
            })?
            .to_rgb8();
        let merged = merge_board_onto_template(template, &board);

        let file_name = board_path
            .file_name()
            .map_or_else(
                || "board.png".to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
        let output_path = output_dir.join(file_name);
        merged
            .save(&output_path)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.clone(),
                source: e,
            })?;
        written.push(output_path);
    }
    Ok(written)
}
