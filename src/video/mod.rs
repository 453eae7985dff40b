pub mod cram;
pub mod palette;
pub mod tile;

pub const TILE_SIZE: usize = 8;
pub const TILE_BYTES: usize = 16;
pub const TILES_PER_BANK: usize = 384;
pub const BANK_BYTES: usize = TILES_PER_BANK * TILE_BYTES;

pub const TILES_PER_ROW: usize = 16;
pub const TILE_ROWS: usize = TILES_PER_BANK / TILES_PER_ROW;
