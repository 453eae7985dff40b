pub mod vram;

pub const VRAM_ADDRESS: u16 = 0x8000;
pub const VRAM_BANK_SIZE: usize = 0x2000;
pub const TILE_DATA_SIZE: usize = 0x1800;
