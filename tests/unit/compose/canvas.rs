//! Tests for board layout math and canvas assembly

use crate::support::solid_tile;
use bingotiles::compose::canvas::{BoardLayout, compose_board};
use image::Rgb;

#[test]
fn test_layout_dimensions_match_reference_geometry() {
    let layout = BoardLayout::new(5, 100);
    assert_eq!(layout.cell_count(), 25);
    assert_eq!(layout.pool_requirement(), 24);
    assert_eq!(layout.center_cell(), (2, 2));
    assert_eq!(layout.inner_extent(), 504, "5*(100+1)-1");
    assert_eq!(layout.outer_extent(), 506, "inner plus 1px border on each side");
}

#[test]
fn test_cell_origins_leave_single_pixel_gaps() {
    let layout = BoardLayout::new(3, 4);
    assert_eq!(layout.cell_origin(0, 0), (0, 0));
    assert_eq!(layout.cell_origin(0, 1), (5, 0));
    assert_eq!(layout.cell_origin(2, 2), (10, 10));
}

#[test]
fn test_compose_places_center_tiles_and_borders() {
    let layout = BoardLayout::new(3, 4);
    let center = solid_tile(4, [0, 0, 255]);
    let red = solid_tile(4, [255, 0, 0]);
    let tiles: Vec<&_> = std::iter::repeat_n(&red, 8).collect();

    let board = compose_board(layout, &center, &tiles).expect("compose");
    assert_eq!(board.dimensions(), (16, 16));

    // Exterior border
    assert_eq!(board.get_pixel(0, 0), &Rgb([0, 0, 0]));
    assert_eq!(board.get_pixel(15, 15), &Rgb([0, 0, 0]));

    // Cell outline at the first cell's top-left corner
    assert_eq!(board.get_pixel(1, 1), &Rgb([0, 0, 0]));

    // Non-center tile interior
    assert_eq!(board.get_pixel(3, 3), &Rgb([255, 0, 0]));

    // Center cell interior holds the center tile
    assert_eq!(board.get_pixel(8, 8), &Rgb([0, 0, 255]));

    // Gap column between the first two cells is covered by the outline
    assert_eq!(board.get_pixel(5, 3), &Rgb([0, 0, 0]));
}

#[test]
fn test_compose_rejects_wrong_tile_count() {
    let layout = BoardLayout::new(3, 4);
    let center = solid_tile(4, [0, 0, 255]);
    let red = solid_tile(4, [255, 0, 0]);
    let tiles: Vec<&_> = std::iter::repeat_n(&red, 7).collect();

    assert!(compose_board(layout, &center, &tiles).is_err());
}

#[test]
fn test_compose_rejects_mis_sized_tiles() {
    let layout = BoardLayout::new(3, 4);
    let center = solid_tile(4, [0, 0, 255]);
    let wrong = solid_tile(5, [255, 0, 0]);
    let tiles: Vec<&_> = std::iter::repeat_n(&wrong, 8).collect();

    assert!(compose_board(layout, &center, &tiles).is_err());
}
