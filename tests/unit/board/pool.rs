//! Tests for tile pool discovery, validation, and sampling

use bingotiles::GenerationError;
use bingotiles::board::pool::TilePool;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_discovery_filters_and_sorts() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["b.JPG", "a.png", "c.jpeg", "notes.txt", "d.gif", "center.png"] {
        fs::write(dir.path().join(name), b"x").expect("fixture write");
    }

    let pool = TilePool::from_directory(dir.path(), "center.png").expect("pool");

    let names = pool.file_names();
    assert_eq!(
        names,
        vec!["a.png".to_string(), "b.JPG".to_string(), "c.jpeg".to_string()],
        "only image extensions are admitted, sorted, with the center held out"
    );
    assert_eq!(pool.len(), 3);
    assert!(!names.contains(&"center.png".to_string()));
}

#[test]
fn test_missing_center_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.png"), b"x").expect("fixture write");

    let err = TilePool::from_directory(dir.path(), "center.png").unwrap_err();
    assert!(
        matches!(err, GenerationError::MissingCenterTile { .. }),
        "expected MissingCenterTile, got: {err}"
    );
}

#[test]
fn test_insufficient_pool_reports_sizes() {
    let tiles: Vec<PathBuf> = (0..10).map(|i| PathBuf::from(format!("{i}.png"))).collect();
    let pool = TilePool::from_parts(tiles, PathBuf::from("center.png"));

    let err = pool.validate(24).unwrap_err();
    match err {
        GenerationError::InsufficientPool {
            available,
            required,
        } => {
            assert_eq!(available, 10);
            assert_eq!(required, 24);
        }
        other => unreachable!("expected InsufficientPool, got: {other}"),
    }
}

#[test]
fn test_sample_is_distinct_without_replacement() {
    let tiles: Vec<PathBuf> = (0..30).map(|i| PathBuf::from(format!("{i:02}.png"))).collect();
    let pool = TilePool::from_parts(tiles, PathBuf::from("center.png"));
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let sample = pool.sample(&mut rng, 24).expect("sample");
        assert_eq!(sample.len(), 24);
        let distinct: HashSet<_> = sample.iter().collect();
        assert_eq!(
            distinct.len(),
            24,
            "sampling without replacement must never repeat a tile"
        );
    }
}

#[test]
fn test_sample_larger_than_pool_fails() {
    let tiles: Vec<PathBuf> = (0..5).map(|i| PathBuf::from(format!("{i}.png"))).collect();
    let pool = TilePool::from_parts(tiles, PathBuf::from("center.png"));
    let mut rng = StdRng::seed_from_u64(7);

    assert!(pool.sample(&mut rng, 6).is_err());
}
