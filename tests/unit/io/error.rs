//! Tests for error display and source chaining

use bingotiles::GenerationError;
use std::path::PathBuf;

#[test]
fn test_missing_center_tile_display_names_the_path() {
    let err = GenerationError::MissingCenterTile {
        path: PathBuf::from("bingo_spaces/center.png"),
    };
    assert!(err.to_string().contains("bingo_spaces/center.png"));
}

#[test]
fn test_retries_exhausted_display_reports_progress() {
    let err = GenerationError::RetriesExhausted {
        attempts: 50,
        produced: 3,
        target: 8,
    };
    let message = err.to_string();
    assert!(message.contains("50 attempts"));
    assert!(message.contains("3/8"));
}

#[test]
fn test_image_errors_expose_their_source() {
    let source = image::ImageError::IoError(std::io::Error::other("broken"));
    let err = GenerationError::ImageExport {
        path: PathBuf::from("out.png"),
        source,
    };
    assert!(std::error::Error::source(&err).is_some());
}
