//! Runtime constants and configuration defaults

// Board layout
/// Default number of cells per board side
pub const DEFAULT_GRID_SIZE: u32 = 5;
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 100;
/// Gap left between adjacent cells, also the cell outline width
pub const CELL_GAP: u32 = 1;
/// Width of the solid black border around the assembled board
pub const EXTERIOR_BORDER: u32 = 1;

// Print template (quarter letter sheet)
/// Template width in inches
pub const TEMPLATE_WIDTH_IN: f64 = 4.25;
/// Template height in inches
pub const TEMPLATE_HEIGHT_IN: f64 = 5.5;
/// Render and print resolution in dots per inch
pub const DEFAULT_DPI: u32 = 300;
/// Fraction of the template width the board is scaled to
pub const BOARD_WIDTH_FRACTION: f64 = 0.8;
/// Template background color
pub const TEMPLATE_BACKGROUND: [u8; 3] = [100, 100, 100];

// Output layout
/// Prefix for persisted board filenames, followed by the board hash
pub const BOARD_FILE_PREFIX: &str = "board_";
/// Extension for persisted board images
pub const BOARD_FILE_EXTENSION: &str = "png";
/// Cards printed per physical page (2x2 quarter sheets)
pub const CARDS_PER_PAGE: u32 = 4;
/// Timestamp format for template backup filenames
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S-%f";

// Tile pool
/// Image extensions admitted into the tile pool (matched case-insensitively)
pub const TILE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// Default filesystem layout
/// Directory scanned for tile images
pub const DEFAULT_TILE_DIR: &str = "bingo_spaces";
/// Filename of the fixed center tile inside the tile directory
pub const DEFAULT_CENTER_FILE: &str = "center.png";
/// Directory receiving raw generated boards
pub const DEFAULT_BOARD_DIR: &str = "bingo_board";
/// Directory receiving boards merged onto the template
pub const DEFAULT_MERGED_DIR: &str = "bingo_board_with_template";
/// Path of the editable print template
pub const DEFAULT_TEMPLATE_FILE: &str = "bingo_border_template.png";
/// Directory receiving timestamped template backups
pub const DEFAULT_BACKUP_DIR: &str = "template_backups";
/// Path of the assembled multipage document
pub const DEFAULT_PDF_FILE: &str = "bingo_cards.pdf";
/// Path of the emitted tile manifest
pub const DEFAULT_MANIFEST_FILE: &str = "bingoList.js";
/// Variable name the manifest array is assigned to
pub const MANIFEST_VARIABLE: &str = "availableSpaces";
