use crate::memory::VRAM_ADDRESS;
use crate::tileset::TileDecoder;
use crate::video::{TILE_BYTES, TILE_SIZE};
use eframe::egui;
use egui::{vec2, Color32, ColorImage, Context, Image, TextureHandle, TextureOptions};

const ZOOM: f32 = 16.0;

pub fn tile_address(index: usize) -> u16 {
    VRAM_ADDRESS + (index * TILE_BYTES) as u16
}

/// Inspector window for the tile selected in the mosaic.
pub struct Debugger {
    pub window_open: bool,
    selected: Option<(usize, usize)>,
    tile_texture: Option<TextureHandle>,
}

impl Debugger {
    pub fn new() -> Self {
        Self {
            window_open: false,
            selected: None,
            tile_texture: None,
        }
    }

    pub fn select(&mut self, bank: usize, index: usize) {
        self.selected = Some((bank, index));
        self.window_open = true;
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn update_ui(&mut self, ctx: &Context, decoder: &TileDecoder) {
        let selected = self.selected;
        let tile_texture = &mut self.tile_texture;

        egui::Window::new("Tile").open(&mut self.window_open).show(ctx, |ui| {
            let Some((bank, index)) = selected else {
                ui.label("Click a tile to inspect it");
                return;
            };

            let tile = decoder.tile_snapshot(bank, index);
            let image = ColorImage::from_rgba_unmultiplied([TILE_SIZE, TILE_SIZE], tile.as_rgba());
            let texture = tile_texture.get_or_insert_with(|| {
                ui.ctx().load_texture(
                    "tile_texture",
                    ColorImage::new([TILE_SIZE, TILE_SIZE], Color32::TRANSPARENT),
                    TextureOptions::NEAREST,
                )
            });
            texture.set(image, TextureOptions::NEAREST);

            ui.label(format!("Bank {} tile {:03} at ${:04x}", bank, index, tile_address(index)));
            ui.separator();
            ui.add(Image::new(&*texture).fit_to_exact_size(vec2(TILE_SIZE as f32 * ZOOM, TILE_SIZE as f32 * ZOOM)));
        });
    }

    pub fn toggle_window(&mut self) {
        self.window_open = !self.window_open;
    }
}

impl Default for Debugger {
    fn default() -> Self {
        Self::new()
    }
}
