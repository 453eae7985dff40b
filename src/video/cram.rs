use crate::video::palette::{Color, PaletteResolver};

pub const CRAM_SIZE: usize = 64;
pub const PALETTE_SLOTS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteKind {
    Background,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgbPalette {
    pub kind: PaletteKind,
    pub slot: u8,
}

/// Color palette RAM of color mode hardware.
#[derive(Clone)]
pub struct Cram {
    background_palette: [u8; CRAM_SIZE],
    object_palette: [u8; CRAM_SIZE],
}

impl Cram {
    /// Builds palette RAM from a 128 byte dump, background palettes first.
    pub fn from_dump(dump: &[u8; CRAM_SIZE * 2]) -> Cram {
        let mut background_palette = [0; CRAM_SIZE];
        let mut object_palette = [0; CRAM_SIZE];
        background_palette.copy_from_slice(&dump[..CRAM_SIZE]);
        object_palette.copy_from_slice(&dump[CRAM_SIZE..]);

        Cram {
            background_palette,
            object_palette,
        }
    }

    pub fn fetch_bg(&self, slot: u8, index: u8) -> u16 {
        Self::fetch(&self.background_palette, slot, index)
    }

    pub fn fetch_obj(&self, slot: u8, index: u8) -> u16 {
        Self::fetch(&self.object_palette, slot, index)
    }

    fn fetch(palette: &[u8; CRAM_SIZE], slot: u8, index: u8) -> u16 {
        assert!(slot < PALETTE_SLOTS, "Invalid palette slot: {}", slot);
        assert!(index < 4, "Invalid color value: {}", index);

        let addr = (slot as usize * 8) + (index as usize * 2);
        (palette[addr + 1] as u16) << 8 | palette[addr] as u16
    }
}

/// Expands a little endian RGB555 word to 8 bits per channel.
pub fn rgb555_to_color(word: u16) -> Color {
    let expand = |c: u16| -> u8 {
        let c = (c & 0x1f) as u8;
        (c << 3) | (c >> 2)
    };

    [expand(word), expand(word >> 5), expand(word >> 10)]
}

impl PaletteResolver for Cram {
    type Selector = CgbPalette;

    fn resolve(&self, selector: CgbPalette, index: u8) -> Color {
        let word = match selector.kind {
            PaletteKind::Background => self.fetch_bg(selector.slot, index),
            PaletteKind::Object => self.fetch_obj(selector.slot, index),
        };

        rgb555_to_color(word)
    }
}
