//! Multipage PDF assembly
//!
//! Merged board images become one PDF page each, in filename-sorted order.
//! Page physical size is derived from pixel dimensions at the print DPI, so a
//! 300 DPI quarter-letter image yields a 4.25in x 5.5in page.

use crate::io::error::{GenerationError, Result, fs_error};
use crate::io::prompt::Prompter;
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument,
    PdfDocumentReference, Px,
};
use std::path::{Path, PathBuf};

const MM_PER_INCH: f64 = 25.4;

/// Collect the PNG images to paginate, sorted by filename
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] if the directory cannot be read.
pub fn collect_page_images(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
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
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}

/// Render the given images into PDF bytes, one page per image
///
/// # Errors
///
/// Returns an error if an image cannot be decoded or the document cannot be
/// serialized.
pub fn build_document(pages: &[PathBuf], title: &str, dpi: f64) -> Result<Vec<u8>> {
    let mut document: Option<PdfDocumentReference> = None;

    for page_path in pages {
        let pixels = image::open(page_path)
            .map_err(|e| GenerationError::ImageLoad {
                path: page_path.clone(),
                source: e,
            })?
            .to_rgb8();
        let (width, height) = pixels.dimensions();
        // printpdf works in f32 millimeters; page math stays f64 until here
        let page_width = Mm((f64::from(width) / dpi * MM_PER_INCH) as f32);
        let page_height = Mm((f64::from(height) / dpi * MM_PER_INCH) as f32);

        let (doc, page, layer) = match document.take() {
            None => PdfDocument::new(title, page_width, page_height, "board"),
            Some(doc) => {
                let (page, layer) = doc.add_page(page_width, page_height, "board");
                (doc, page, layer)
            }
        };

        let xobject = ImageXObject {
            width: Px(width as usize),
            height: Px(height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: false,
            image_data: pixels.into_raw(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        };
        Image::from(xobject).add_to_layer(
            doc.get_page(page).get_layer(layer),
            ImageTransform {
                dpi: Some(dpi as f32),
                ..ImageTransform::default()
            },
        );

        document = Some(doc);
    }

    let doc = document.ok_or_else(|| GenerationError::InvalidParameter {
        parameter: "pages",
        value: "0".to_string(),
        reason: "at least one image is required to build a document".to_string(),
    })?;
    doc.save_to_bytes().map_err(|e| GenerationError::PdfExport {
        path: PathBuf::from(title),
        reason: e.to_string(),
    })
}

/// Assemble all merged boards under `input_dir` into one multipage PDF
///
/// Returns the number of pages written, or 0 if the directory holds no
/// images. A write that fails with a permission error is retried indefinitely,
/// each retry gated on the operator acknowledging that the file is no longer
/// in use; there is no automatic fallback path.
///
/// # Errors
///
/// Returns an error if the images cannot be read, the document cannot be
/// built, the write fails for a reason other than permissions, or the prompt
/// stream fails.
pub fn assemble_pdf(
    input_dir: &Path,
    output_path: &Path,
    dpi: f64,
    prompter: &mut dyn Prompter,
) -> Result<usize> {
    let pages = collect_page_images(input_dir)?;
    if pages.is_empty() {
        return Ok(0);
    }

    let title = output_path
        .file_stem()
        .map_or_else(|| "bingo_cards".to_string(), |s| s.to_string_lossy().into_owned());
    let bytes = build_document(&pages, &title, dpi)?;

    loop {
        match std::fs::write(output_path, &bytes) {
            Ok(()) => return Ok(pages.len()),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                prompter.acknowledge(&format!(
                    "Permission error: unable to save the file '{}'. Please close the file if it is open.",
                    output_path.display()
                ))?;
            }
            Err(e) => return Err(fs_error(output_path, "write", e)),
        }
    }
}
