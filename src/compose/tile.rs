//! Tile loading and transparency flattening

use crate::io::error::{GenerationError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

/// Alpha-compose an image onto an opaque white background
///
/// Images without an alpha channel pass through as RGB. The output never
/// carries transparency, so printed cells are always opaque.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flattened = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u32::from(a);
        let blend = |channel: u8| -> u8 {
            ((u32::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        flattened.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    flattened
}

/// Decode a tile, resize it to the cell size, and flatten transparency
///
/// # Errors
///
/// Returns [`GenerationError::ImageLoad`] if the file cannot be opened or
/// decoded.
pub fn load_tile(path: &Path, tile_size: u32) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| GenerationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let resized = decoded.resize_exact(tile_size, tile_size, FilterType::CatmullRom);
    Ok(flatten_onto_white(&resized))
}
