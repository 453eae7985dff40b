use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ViewerError {
    #[snafu(display("Failed to read dump from {}", path.display()))]
    ReadDump { path: PathBuf, source: std::io::Error },
    #[snafu(display("Invalid VRAM dump size: {:#06x} bytes (expected 0x2000 or 0x4000)", size))]
    InvalidDumpSize { size: usize },
    #[snafu(display("Invalid CRAM dump size: {} bytes (expected 128)", size))]
    InvalidCramSize { size: usize },
    #[snafu(display("Color mode requires a two bank VRAM dump"))]
    MissingColorBank,
    #[snafu(display("Failed to set up logging"))]
    Logger { source: log::SetLoggerError },
    #[snafu(display("Frontend failure: {}", message))]
    Frontend { message: String },
}
