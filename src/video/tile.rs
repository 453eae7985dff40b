use crate::video::{TILES_PER_BANK, TILE_BYTES, TILE_SIZE};

/// Combines bit `7 - x` of the two row bytes into a 2-bit color index.
#[inline]
pub fn color_index(lower: u8, upper: u8, x: usize) -> u8 {
    let lsb_bit = (lower >> (7 - x)) & 0b0000_0001;
    let msb_bit = (upper >> (7 - x)) & 0b0000_0001;
    (msb_bit << 1) | lsb_bit
}

/// Color indices of a single 2bpp tile, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub pixels: [[u8; TILE_SIZE]; TILE_SIZE],
}

impl Tile {
    pub fn decode(data: &[u8]) -> Tile {
        assert_eq!(data.len(), TILE_BYTES, "Invalid tile data length: {}", data.len());

        let mut pixels = [[0u8; TILE_SIZE]; TILE_SIZE];
        for (y, row) in data.chunks_exact(2).enumerate() {
            let lower = row[0];
            let upper = row[1];

            for x in 0..TILE_SIZE {
                pixels[y][x] = color_index(lower, upper, x);
            }
        }

        Tile { pixels }
    }

    /// Decodes tile `index` from the tile data region of a bank.
    pub fn from_bank(bank: &[u8], index: usize) -> Tile {
        assert!(index < TILES_PER_BANK, "Invalid tile index: {}", index);

        let address = index * TILE_BYTES;
        Tile::decode(&bank[address..address + TILE_BYTES])
    }
}

impl Default for Tile {
    fn default() -> Tile {
        Tile {
            pixels: [[0; TILE_SIZE]; TILE_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_matches_formula_for_all_inputs() {
        for lower in 0..=255u8 {
            for upper in 0..=255u8 {
                for x in 0..8 {
                    let expected = (((upper >> (7 - x)) & 1) << 1) | ((lower >> (7 - x)) & 1);
                    let index = color_index(lower, upper, x);
                    assert_eq!(index, expected);
                    assert!(index <= 3);
                }
            }
        }
    }

    #[test]
    fn decodes_example_row() {
        let mut data = [0u8; TILE_BYTES];
        data[0] = 0b1011_0000;
        data[1] = 0b1110_0000;

        let tile = Tile::decode(&data);
        assert_eq!(tile.pixels[0], [3, 2, 3, 1, 0, 0, 0, 0]);
        assert_eq!(tile.pixels[1], [0; 8]);
    }

    #[test]
    fn reads_tile_at_index_offset() {
        let mut bank = vec![0u8; TILES_PER_BANK * TILE_BYTES];
        // last row of tile 2
        bank[2 * TILE_BYTES + 14] = 0b0000_0001;
        bank[2 * TILE_BYTES + 15] = 0b1000_0001;

        let tile = Tile::from_bank(&bank, 2);
        assert_eq!(tile.pixels[7], [2, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(Tile::from_bank(&bank, 1), Tile::default());
    }

    #[test]
    #[should_panic(expected = "Invalid tile index")]
    fn rejects_tile_index_out_of_range() {
        let bank = vec![0u8; TILES_PER_BANK * TILE_BYTES];
        Tile::from_bank(&bank, TILES_PER_BANK);
    }
}
