use crate::error::{InvalidCramSizeSnafu, MissingColorBankSnafu, ViewerError};
use crate::memory::vram::Vram;
use crate::tileset::{ColorMode, GridConfig};
use crate::video::cram::{CgbPalette, Cram, CRAM_SIZE};
use crate::video::palette::{DmgPalette, DmgPaletteRegister};
use snafu::{ensure, OptionExt};

/// Palette state the viewer resolves colors through.
#[derive(Clone)]
pub enum PaletteSource {
    Dmg {
        palette: DmgPalette,
        register: DmgPaletteRegister,
    },
    Cgb {
        cram: Cram,
        palette: CgbPalette,
    },
}

#[derive(Clone)]
pub struct Settings {
    pub mode: ColorMode,
    pub palette: PaletteSource,
    pub grid: GridConfig,
    pub scale: usize,
}

impl Settings {
    pub fn validate(&self, vram: &Vram) -> Result<(), ViewerError> {
        ensure!(
            vram.bank_count() >= self.mode.bank_count(),
            MissingColorBankSnafu
        );
        Ok(())
    }
}

pub fn load_cram(dump: &[u8]) -> Result<Cram, ViewerError> {
    let dump: &[u8; CRAM_SIZE * 2] = dump
        .try_into()
        .ok()
        .context(InvalidCramSizeSnafu { size: dump.len() })?;

    Ok(Cram::from_dump(dump))
}
