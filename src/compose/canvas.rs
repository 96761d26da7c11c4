//! Board canvas layout and assembly
//!
//! Tiles are laid out row-major with a 1px gap between cells, every cell gets
//! a 1px black outline, and the assembled grid receives a 1px solid black
//! exterior border. For grid size 5 and tile size 100 the final canvas is
//! 506x506: inner `5*(100+1)-1 = 504`, plus one border pixel on each side.

use crate::io::configuration::{CELL_GAP, EXTERIOR_BORDER};
use crate::io::error::{Result, invalid_parameter};
use image::{Rgb, RgbImage, imageops};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Geometry of a square board: cell grid, gaps, and borders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    /// Number of cells per side
    pub grid_size: u32,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl BoardLayout {
    /// Create a layout for a `grid_size` x `grid_size` board
    pub const fn new(grid_size: u32, tile_size: u32) -> Self {
        Self {
            grid_size,
            tile_size,
        }
    }

    /// Total number of cells on the board
    pub const fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// Number of pool tiles needed to fill the non-center cells
    pub const fn pool_requirement(&self) -> usize {
        self.cell_count() - 1
    }

    /// The exact center cell, `(row, col)` with integer division
    pub const fn center_cell(&self) -> (u32, u32) {
        (self.grid_size / 2, self.grid_size / 2)
    }

    /// Pixel origin of a cell on the inner canvas
    pub const fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        let stride = self.tile_size + CELL_GAP;
        (col * stride, row * stride)
    }

    /// Edge length of the assembled grid before the exterior border
    pub const fn inner_extent(&self) -> u32 {
        self.grid_size * (self.tile_size + CELL_GAP) - CELL_GAP
    }

    /// Edge length of the final bordered canvas
    pub const fn outer_extent(&self) -> u32 {
        self.inner_extent() + 2 * EXTERIOR_BORDER
    }
}

// Outline edges falling outside the canvas are clipped, not shifted inward;
// the bottom and right edges of the last row and column land on the exterior
// border instead.
fn draw_cell_outline(canvas: &mut RgbImage, origin: (u32, u32), tile_size: u32) {
    let (width, height) = canvas.dimensions();
    let (x, y) = origin;
    let right = x + tile_size;
    let bottom = y + tile_size;

    for cx in x..=right.min(width - 1) {
        canvas.put_pixel(cx, y, BLACK);
        if bottom < height {
            canvas.put_pixel(cx, bottom, BLACK);
        }
    }
    for cy in y..=bottom.min(height - 1) {
        canvas.put_pixel(x, cy, BLACK);
        if right < width {
            canvas.put_pixel(right, cy, BLACK);
        }
    }
}

/// Assemble a full board image from a center tile and sampled tiles
///
/// Tiles are consumed in sampling order, row-major, skipping the center cell,
/// which always receives `center`. All inputs must already be flattened and
/// resized to the layout's tile size.
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] if the tile count does
/// not match the layout's non-center cell count or a tile has the wrong
/// dimensions.
pub fn compose_board(
    layout: BoardLayout,
    center: &RgbImage,
    tiles: &[&RgbImage],
) -> Result<RgbImage> {
    if tiles.len() != layout.pool_requirement() {
        return Err(invalid_parameter(
            "tiles",
            &tiles.len(),
            &format!("expected {} tiles for the layout", layout.pool_requirement()),
        ));
    }
    let expected = (layout.tile_size, layout.tile_size);
    for tile in tiles.iter().copied().chain(std::iter::once(center)) {
        if tile.dimensions() != expected {
            return Err(invalid_parameter(
                "tile dimensions",
                &format!("{:?}", tile.dimensions()),
                &format!("every tile must be {}x{}", expected.0, expected.1),
            ));
        }
    }

    let extent = layout.inner_extent();
    let mut inner = RgbImage::from_pixel(extent, extent, WHITE);
    let center_cell = layout.center_cell();

    let mut next_tile = tiles.iter().copied();
    for row in 0..layout.grid_size {
        for col in 0..layout.grid_size {
            let origin = layout.cell_origin(row, col);
            let tile = if (row, col) == center_cell {
                center
            } else {
                next_tile.next().ok_or_else(|| {
                    invalid_parameter("tiles", &tiles.len(), &"ran out of sampled tiles")
                })?
            };
            imageops::replace(&mut inner, tile, i64::from(origin.0), i64::from(origin.1));
            draw_cell_outline(&mut inner, origin, layout.tile_size);
        }
    }

    let outer_extent = layout.outer_extent();
    let mut bordered = RgbImage::from_pixel(outer_extent, outer_extent, BLACK);
    imageops::replace(
        &mut bordered,
        &inner,
        i64::from(EXTERIOR_BORDER),
        i64::from(EXTERIOR_BORDER),
    );
    Ok(bordered)
}
