pub mod error;
pub mod frontend;
pub mod memory;
pub mod tileset;
pub mod video;
