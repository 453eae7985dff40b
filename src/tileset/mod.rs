pub mod canvas;
pub mod decoder;

pub use canvas::{GridConfig, MosaicCanvas, PixelBuffer, Rgba};
pub use decoder::{ColorMode, TileDecoder};
