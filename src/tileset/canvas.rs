use crate::video::{TILES_PER_BANK, TILES_PER_ROW, TILE_ROWS, TILE_SIZE};
use log::info;

pub type Rgba = [u8; 4];

pub const GRID_COLOR: Rgba = [0x8f, 0x8f, 0x8f, 0xff];
pub const BLANK: Rgba = [0x00, 0x00, 0x00, 0x00];

// Tile rows that get a horizontal separator above them
const SEPARATOR_ROWS: [usize; 2] = [8, 16];

/// Row-major RGBA image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Rgba {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        let offset = self.offset(x, y);
        self.data[offset..offset + 4].copy_from_slice(&color);
    }

    /// Raw RGBA bytes, row by row.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({}, {}) outside of {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y * self.width + x) * 4
    }
}

/// Separator widths of the mosaic.
///
/// `vertical_width` is the width of the separator to the right of every
/// bank. `horizontal_width` is the combined height of the two horizontal
/// separators: the one at tile row 8 gets half of it, the one at tile row 16
/// the remainder. With the default of 2 each horizontal line is a single
/// pixel, at y=64 and y=129.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub vertical_width: usize,
    pub horizontal_width: usize,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            vertical_width: 3,
            horizontal_width: 2,
        }
    }
}

impl GridConfig {
    pub fn bank_width(&self) -> usize {
        TILES_PER_ROW * TILE_SIZE + self.vertical_width
    }

    pub fn height(&self) -> usize {
        TILE_ROWS * TILE_SIZE + self.horizontal_width
    }

    /// Pixels of horizontal separator above `tile_row`.
    pub fn row_correction(&self, tile_row: usize) -> usize {
        match tile_row / 8 {
            0 => 0,
            1 => self.horizontal_width / 2,
            _ => self.horizontal_width,
        }
    }

    /// Top-left mosaic pixel of a tile.
    pub fn tile_origin(&self, bank: usize, index: usize) -> (usize, usize) {
        let column = index % TILES_PER_ROW;
        let row = index / TILES_PER_ROW;

        let x = bank * self.bank_width() + column * TILE_SIZE;
        let y = row * TILE_SIZE + self.row_correction(row);
        (x, y)
    }

    /// (start y, thickness) of each horizontal separator.
    pub fn horizontal_lines(&self) -> [(usize, usize); 2] {
        SEPARATOR_ROWS.map(|row| {
            let above = self.row_correction(row - 1);
            (row * TILE_SIZE + above, self.row_correction(row) - above)
        })
    }

    /// Maps a mosaic pixel back to the (bank, tile index) drawn there.
    pub fn tile_at(&self, x: usize, y: usize, bank_count: usize) -> Option<(usize, usize)> {
        let bank = x / self.bank_width();
        let local_x = x % self.bank_width();
        if bank >= bank_count || local_x >= TILES_PER_ROW * TILE_SIZE {
            return None;
        }

        let row = (0..TILE_ROWS).find(|&row| {
            let top = row * TILE_SIZE + self.row_correction(row);
            (top..top + TILE_SIZE).contains(&y)
        })?;

        Some((bank, row * TILES_PER_ROW + local_x / TILE_SIZE))
    }
}

/// Backing store of the tile viewer: one overview image with every bank side
/// by side, plus an 8x8 image per tile.
pub struct MosaicCanvas {
    grid: GridConfig,
    bank_count: usize,
    overall: PixelBuffer,
    tiles: Vec<PixelBuffer>,
    background_map: Option<PixelBuffer>,
}

impl MosaicCanvas {
    pub fn new(bank_count: usize, grid: GridConfig) -> MosaicCanvas {
        let mut canvas = MosaicCanvas {
            grid,
            bank_count: 0,
            overall: PixelBuffer::new(0, 0),
            tiles: Vec::new(),
            background_map: None,
        };
        canvas.initialize(bank_count);
        canvas
    }

    /// Reallocates every buffer for `bank_count` banks and paints the grid.
    pub fn initialize(&mut self, bank_count: usize) {
        assert!(
            (1..=2).contains(&bank_count),
            "Invalid bank count: {}",
            bank_count
        );

        let width = bank_count * self.grid.bank_width();
        let height = self.grid.height();
        self.bank_count = bank_count;
        self.overall = PixelBuffer::new(width, height);

        for bank in 0..bank_count {
            let start = bank * self.grid.bank_width() + TILES_PER_ROW * TILE_SIZE;
            for x in start..start + self.grid.vertical_width {
                for y in 0..height {
                    self.overall.set(x, y, GRID_COLOR);
                }
            }
        }

        for (start, thickness) in self.grid.horizontal_lines() {
            for y in start..start + thickness {
                for x in 0..width {
                    self.overall.set(x, y, GRID_COLOR);
                }
            }
        }

        self.tiles = vec![PixelBuffer::new(TILE_SIZE, TILE_SIZE); TILES_PER_BANK * bank_count];

        info!("Initialized {}x{} tile mosaic for {} bank(s)", width, height, bank_count);
    }

    pub fn set_pixel(&mut self, bank: usize, tile_index: usize, x: usize, y: usize, color: Rgba) {
        assert!(bank < self.bank_count, "Invalid bank: {}", bank);
        assert!(tile_index < TILES_PER_BANK, "Invalid tile index: {}", tile_index);
        assert!(x < TILE_SIZE && y < TILE_SIZE, "Invalid tile pixel: ({}, {})", x, y);

        self.tiles[bank * TILES_PER_BANK + tile_index].set(x, y, color);

        let (origin_x, origin_y) = self.grid.tile_origin(bank, tile_index);
        self.overall.set(origin_x + x, origin_y + y, color);
    }

    pub fn mosaic_snapshot(&self) -> &PixelBuffer {
        &self.overall
    }

    pub fn tile_snapshot(&self, bank: usize, tile_index: usize) -> &PixelBuffer {
        assert!(bank < self.bank_count, "Invalid bank: {}", bank);
        assert!(tile_index < TILES_PER_BANK, "Invalid tile index: {}", tile_index);

        &self.tiles[bank * TILES_PER_BANK + tile_index]
    }

    pub fn is_gridline(&self, x: usize, y: usize) -> bool {
        let vertical = x % self.grid.bank_width() >= TILES_PER_ROW * TILE_SIZE;
        let horizontal = self
            .grid
            .horizontal_lines()
            .iter()
            .any(|&(start, thickness)| (start..start + thickness).contains(&y));

        vertical || horizontal
    }

    pub fn bank_count(&self) -> usize {
        self.bank_count
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn set_background_map(&mut self, image: PixelBuffer) {
        self.background_map = Some(image);
    }

    pub fn background_map(&self) -> Option<&PixelBuffer> {
        self.background_map.as_ref()
    }
}
