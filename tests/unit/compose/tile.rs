//! Tests for tile loading and transparency flattening

use crate::support::write_solid_tile;
use bingotiles::compose::tile::{flatten_onto_white, load_tile};
use image::{DynamicImage, Rgb, Rgba, RgbaImage, RgbImage};

#[test]
fn test_opaque_image_passes_through() {
    let source = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    let flattened = flatten_onto_white(&DynamicImage::ImageRgb8(source));
    assert_eq!(flattened.get_pixel(2, 2), &Rgb([10, 20, 30]));
}

#[test]
fn test_fully_transparent_becomes_white() {
    let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    let flattened = flatten_onto_white(&DynamicImage::ImageRgba8(source));
    assert_eq!(flattened.get_pixel(0, 0), &Rgb([255, 255, 255]));
}

#[test]
fn test_fully_opaque_alpha_keeps_color() {
    let source = RgbaImage::from_pixel(4, 4, Rgba([200, 10, 60, 255]));
    let flattened = flatten_onto_white(&DynamicImage::ImageRgba8(source));
    assert_eq!(flattened.get_pixel(1, 1), &Rgb([200, 10, 60]));
}

#[test]
fn test_partial_alpha_blends_onto_white() {
    let source = RgbaImage::from_pixel(1, 1, Rgba([100, 200, 50, 127]));
    let flattened = flatten_onto_white(&DynamicImage::ImageRgba8(source));
    // channel * 127/255 + 255 * 128/255, truncated
    assert_eq!(flattened.get_pixel(0, 0), &Rgb([177, 227, 152]));
}

#[test]
fn test_load_tile_resizes_to_cell_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tile.png");
    write_solid_tile(&path, 16, [40, 0, 0]);

    let tile = load_tile(&path, 8).expect("load");
    assert_eq!(tile.dimensions(), (8, 8));
    assert_eq!(tile.get_pixel(4, 4), &Rgb([40, 0, 0]));
}

#[test]
fn test_load_tile_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(load_tile(&dir.path().join("absent.png"), 8).is_err());
}
