use crate::tileset::canvas::{GridConfig, MosaicCanvas, PixelBuffer};
use crate::video::palette::PaletteResolver;
use crate::video::tile::Tile;
use crate::video::{BANK_BYTES, TILES_PER_BANK, TILE_SIZE};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMode {
    Mono,
    Color,
}

impl ColorMode {
    pub fn bank_count(&self) -> usize {
        match self {
            ColorMode::Mono => 1,
            ColorMode::Color => 2,
        }
    }
}

/// Decodes every tile of the tile data banks into a [`MosaicCanvas`].
pub struct TileDecoder {
    canvas: MosaicCanvas,
}

impl TileDecoder {
    /// Lays out a canvas wide enough for every bank `mode` can address.
    pub fn new(mode: ColorMode, grid: GridConfig) -> TileDecoder {
        TileDecoder {
            canvas: MosaicCanvas::new(mode.bank_count(), grid),
        }
    }

    /// Redecodes all tiles of the first `mode.bank_count()` banks.
    ///
    /// Every pixel is rewritten on each call, so this can be run once per
    /// frame against live memory. Each entry of `banks` must be exactly one
    /// bank of tile data.
    pub fn decode_all<R: PaletteResolver>(
        &mut self, banks: &[&[u8]], resolver: &R, selector: R::Selector, mode: ColorMode,
    ) {
        let bank_count = mode.bank_count();
        assert!(
            bank_count <= self.canvas.bank_count(),
            "Canvas laid out for {} bank(s), {:?} mode needs {}",
            self.canvas.bank_count(),
            mode,
            bank_count
        );
        assert!(
            banks.len() >= bank_count,
            "{:?} mode needs {} bank(s), got {}",
            mode,
            bank_count,
            banks.len()
        );

        debug!("Decoding {} tiles in {:?} mode", bank_count * TILES_PER_BANK, mode);

        for (bank, data) in banks.iter().take(bank_count).enumerate() {
            assert_eq!(data.len(), BANK_BYTES, "Invalid size for bank {}: {}", bank, data.len());

            for index in 0..TILES_PER_BANK {
                let tile = Tile::from_bank(data, index);

                for y in 0..TILE_SIZE {
                    for x in 0..TILE_SIZE {
                        let [r, g, b] = resolver.resolve(selector, tile.pixels[y][x]);
                        self.canvas.set_pixel(bank, index, x, y, [r, g, b, 0xff]);
                    }
                }
            }

            trace!("Decoded bank {}", bank);
        }
    }

    pub fn canvas(&self) -> &MosaicCanvas {
        &self.canvas
    }

    pub fn mosaic_snapshot(&self) -> &PixelBuffer {
        self.canvas.mosaic_snapshot()
    }

    pub fn tile_snapshot(&self, bank: usize, tile_index: usize) -> &PixelBuffer {
        self.canvas.tile_snapshot(bank, tile_index)
    }

    pub fn set_background_map(&mut self, image: PixelBuffer) {
        self.canvas.set_background_map(image);
    }

    pub fn background_map(&self) -> Option<&PixelBuffer> {
        self.canvas.background_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tileset::canvas::{BLANK, GRID_COLOR};
    use crate::video::palette::Color;
    use crate::video::TILE_BYTES;

    struct IdentityPalette;

    impl PaletteResolver for IdentityPalette {
        type Selector = ();

        fn resolve(&self, _selector: (), index: u8) -> Color {
            [index, index, index]
        }
    }

    fn patterned_bank(seed: u8) -> Vec<u8> {
        (0..BANK_BYTES)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect()
    }

    #[test]
    fn decodes_example_row_into_tile_zero() {
        let mut bank = vec![0u8; BANK_BYTES];
        bank[0] = 0b1011_0000;
        bank[1] = 0b1110_0000;

        let mut decoder = TileDecoder::new(ColorMode::Mono, GridConfig::default());
        decoder.decode_all(&[&bank[..]], &IdentityPalette, (), ColorMode::Mono);

        let tile = decoder.tile_snapshot(0, 0);
        let row: Vec<u8> = (0..8).map(|x| tile.get(x, 0)[0]).collect();
        assert_eq!(row, vec![3, 2, 3, 1, 0, 0, 0, 0]);
        assert_eq!(tile.get(0, 0), [3, 3, 3, 0xff]);
        assert_eq!(decoder.mosaic_snapshot().get(1, 0), [2, 2, 2, 0xff]);
        assert_eq!(decoder.mosaic_snapshot().get(3, 0), [1, 1, 1, 0xff]);
    }

    #[test]
    fn places_tile_17_one_row_down() {
        let mut bank = vec![0u8; BANK_BYTES];
        bank[17 * TILE_BYTES] = 0xff;
        bank[17 * TILE_BYTES + 1] = 0xff;

        let mut decoder = TileDecoder::new(ColorMode::Mono, GridConfig::default());
        decoder.decode_all(&[&bank[..]], &IdentityPalette, (), ColorMode::Mono);

        let mosaic = decoder.mosaic_snapshot();
        assert_eq!(mosaic.get(8, 8), [3, 3, 3, 0xff]);
        assert_eq!(mosaic.get(15, 8), [3, 3, 3, 0xff]);
        assert_eq!(mosaic.get(7, 8), [0, 0, 0, 0xff]);
        assert_eq!(mosaic.get(8, 9), [0, 0, 0, 0xff]);
    }

    #[test]
    fn mono_mode_leaves_second_bank_blank() {
        let bank0 = patterned_bank(1);
        let bank1 = patterned_bank(2);

        let mut decoder = TileDecoder::new(ColorMode::Color, GridConfig::default());
        decoder.decode_all(&[&bank0[..], &bank1[..]], &IdentityPalette, (), ColorMode::Mono);

        for index in 0..TILES_PER_BANK {
            assert_eq!(decoder.tile_snapshot(1, index), &PixelBuffer::new(8, 8));
        }
        assert_eq!(decoder.mosaic_snapshot().get(131, 0), BLANK);
        assert_ne!(decoder.tile_snapshot(0, 5), &PixelBuffer::new(8, 8));
    }

    #[test]
    fn color_mode_decodes_both_banks() {
        let bank0 = vec![0u8; BANK_BYTES];
        let bank1 = vec![0xffu8; BANK_BYTES];

        let mut decoder = TileDecoder::new(ColorMode::Color, GridConfig::default());
        decoder.decode_all(&[&bank0[..], &bank1[..]], &IdentityPalette, (), ColorMode::Color);

        assert_eq!(decoder.tile_snapshot(0, 383).get(7, 7), [0, 0, 0, 0xff]);
        assert_eq!(decoder.tile_snapshot(1, 383).get(7, 7), [3, 3, 3, 0xff]);
        assert_eq!(decoder.mosaic_snapshot().get(131, 0), [3, 3, 3, 0xff]);
    }

    #[test]
    fn decoding_is_idempotent() {
        let bank0 = patterned_bank(7);
        let bank1 = patterned_bank(99);

        let mut decoder = TileDecoder::new(ColorMode::Color, GridConfig::default());
        decoder.decode_all(&[&bank0[..], &bank1[..]], &IdentityPalette, (), ColorMode::Color);
        let first = decoder.mosaic_snapshot().clone();
        let first_tile = decoder.tile_snapshot(1, 200).clone();

        decoder.decode_all(&[&bank0[..], &bank1[..]], &IdentityPalette, (), ColorMode::Color);
        assert_eq!(decoder.mosaic_snapshot(), &first);
        assert_eq!(decoder.tile_snapshot(1, 200), &first_tile);
    }

    #[test]
    fn gridlines_survive_decoding() {
        let bank0 = vec![0xffu8; BANK_BYTES];
        let bank1 = vec![0xffu8; BANK_BYTES];

        let mut decoder = TileDecoder::new(ColorMode::Color, GridConfig::default());
        decoder.decode_all(&[&bank0[..], &bank1[..]], &IdentityPalette, (), ColorMode::Color);

        let canvas = decoder.canvas();
        let mosaic = canvas.mosaic_snapshot();
        for y in 0..mosaic.height() {
            for x in 0..mosaic.width() {
                if canvas.is_gridline(x, y) {
                    assert_eq!(mosaic.get(x, y), GRID_COLOR, "gridline at ({}, {})", x, y);
                } else {
                    assert_eq!(mosaic.get(x, y), [3, 3, 3, 0xff], "tile pixel at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn full_pass_overwrites_previous_pixels() {
        let full = vec![0xffu8; BANK_BYTES];
        let empty = vec![0u8; BANK_BYTES];

        let mut decoder = TileDecoder::new(ColorMode::Mono, GridConfig::default());
        decoder.decode_all(&[&full[..]], &IdentityPalette, (), ColorMode::Mono);
        decoder.decode_all(&[&empty[..]], &IdentityPalette, (), ColorMode::Mono);

        assert_eq!(decoder.tile_snapshot(0, 100).get(4, 4), [0, 0, 0, 0xff]);
    }

    #[test]
    #[should_panic(expected = "Canvas laid out for 1 bank(s)")]
    fn color_mode_needs_two_bank_canvas() {
        let bank = vec![0u8; BANK_BYTES];
        let mut decoder = TileDecoder::new(ColorMode::Mono, GridConfig::default());
        decoder.decode_all(&[&bank[..], &bank[..]], &IdentityPalette, (), ColorMode::Color);
    }

    #[test]
    #[should_panic(expected = "Invalid size for bank 0")]
    fn rejects_short_bank() {
        let bank = vec![0u8; BANK_BYTES - 1];
        let mut decoder = TileDecoder::new(ColorMode::Mono, GridConfig::default());
        decoder.decode_all(&[&bank[..]], &IdentityPalette, (), ColorMode::Mono);
    }
}
