use crate::error::{InvalidDumpSizeSnafu, ViewerError};
use crate::memory::{TILE_DATA_SIZE, VRAM_BANK_SIZE};
use log::{debug, warn};
use snafu::ensure;

/// Raw video memory as dumped from the emulator, one or two banks.
#[derive(Clone)]
pub struct Vram {
    banks: Vec<Vec<u8>>,
}

impl Vram {
    #[cfg(test)]
    pub(crate) fn new(bank_count: usize) -> Vram {
        assert!(
            (1..=2).contains(&bank_count),
            "Invalid VRAM bank count: {}",
            bank_count
        );

        Vram {
            banks: vec![vec![0; VRAM_BANK_SIZE]; bank_count],
        }
    }

    /// Splits a raw dump into banks. Bank 0 comes first in a two bank dump.
    pub fn from_dump(dump: &[u8]) -> Result<Vram, ViewerError> {
        ensure!(
            dump.len() == VRAM_BANK_SIZE || dump.len() == VRAM_BANK_SIZE * 2,
            InvalidDumpSizeSnafu { size: dump.len() }
        );

        if dump.iter().all(|&b| b == 0) {
            warn!("VRAM dump is all zeros, every tile will decode to color 0");
        }

        let banks: Vec<Vec<u8>> = dump.chunks_exact(VRAM_BANK_SIZE).map(|b| b.to_vec()).collect();
        debug!("Loaded VRAM dump with {} bank(s)", banks.len());

        Ok(Vram { banks })
    }

    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// The tile data region ($8000-$97FF) of a bank.
    pub fn tile_data(&self, bank: usize) -> &[u8] {
        &self.banks[bank][..TILE_DATA_SIZE]
    }

    /// Tile data of every bank, in bank order.
    pub fn tile_banks(&self) -> Vec<&[u8]> {
        (0..self.bank_count()).map(|bank| self.tile_data(bank)).collect()
    }

    #[cfg(test)]
    pub(crate) fn write(&mut self, bank: usize, offset: usize, data: u8) {
        self.banks[bank][offset] = data;
    }
}
