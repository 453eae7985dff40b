pub type Color = [u8; 3];

/// Maps a 2-bit color index to a concrete color through some palette state
/// owned by the caller.
pub trait PaletteResolver {
    type Selector: Copy;

    fn resolve(&self, selector: Self::Selector, index: u8) -> Color;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shade {
    White,
    LightGray,
    DarkGray,
    Black,
}

impl Shade {
    pub fn from_register(register: u8, index: u8) -> Shade {
        let shade = match index {
            0b00 => register & 0b0000_0011,
            0b01 => (register & 0b0000_1100) >> 2,
            0b10 => (register & 0b0011_0000) >> 4,
            0b11 => (register & 0b1100_0000) >> 6,
            _ => panic!("Invalid color value: {}", index),
        };

        match shade {
            0b00 => Shade::White,
            0b01 => Shade::LightGray,
            0b10 => Shade::DarkGray,
            0b11 => Shade::Black,
            _ => unreachable!(),
        }
    }
}

impl From<Shade> for Color {
    fn from(shade: Shade) -> Color {
        match shade {
            Shade::White => [0xff, 0xff, 0xff],
            Shade::LightGray => [0xaa, 0xaa, 0xaa],
            Shade::DarkGray => [0x55, 0x55, 0x55],
            Shade::Black => [0x00, 0x00, 0x00],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DmgPaletteRegister {
    Bgp,
    Obp0,
    Obp1,
}

/// Monochrome palette registers (BGP, OBP0, OBP1).
#[derive(Debug, Clone)]
pub struct DmgPalette {
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
}

impl DmgPalette {
    pub fn new(bgp: u8, obp0: u8, obp1: u8) -> DmgPalette {
        DmgPalette { bgp, obp0, obp1 }
    }

    pub fn register(&self, register: DmgPaletteRegister) -> u8 {
        match register {
            DmgPaletteRegister::Bgp => self.bgp,
            DmgPaletteRegister::Obp0 => self.obp0,
            DmgPaletteRegister::Obp1 => self.obp1,
        }
    }
}

impl PaletteResolver for DmgPalette {
    type Selector = DmgPaletteRegister;

    fn resolve(&self, selector: DmgPaletteRegister, index: u8) -> Color {
        Shade::from_register(self.register(selector), index).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_register_maps_index_to_shade() {
        // 0b11_10_01_00: index n -> shade n
        let palette = DmgPalette::new(0b1110_0100, 0, 0);

        assert_eq!(palette.resolve(DmgPaletteRegister::Bgp, 0), [0xff, 0xff, 0xff]);
        assert_eq!(palette.resolve(DmgPaletteRegister::Bgp, 1), [0xaa, 0xaa, 0xaa]);
        assert_eq!(palette.resolve(DmgPaletteRegister::Bgp, 2), [0x55, 0x55, 0x55]);
        assert_eq!(palette.resolve(DmgPaletteRegister::Bgp, 3), [0x00, 0x00, 0x00]);
    }

    #[test]
    fn selector_picks_register() {
        let palette = DmgPalette::new(0x00, 0xff, 0b0000_1100);

        assert_eq!(palette.resolve(DmgPaletteRegister::Bgp, 1), Color::from(Shade::White));
        assert_eq!(palette.resolve(DmgPaletteRegister::Obp0, 1), Color::from(Shade::Black));
        assert_eq!(palette.resolve(DmgPaletteRegister::Obp1, 1), Color::from(Shade::Black));
        assert_eq!(palette.resolve(DmgPaletteRegister::Obp1, 0), Color::from(Shade::White));
    }

    #[test]
    #[should_panic(expected = "Invalid color value")]
    fn rejects_index_out_of_range() {
        Shade::from_register(0xe4, 4);
    }
}
