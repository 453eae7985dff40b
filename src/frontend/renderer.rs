use crate::frontend::debugger::Debugger;
use crate::frontend::settings::{PaletteSource, Settings};
use crate::memory::vram::Vram;
use crate::tileset::{PixelBuffer, TileDecoder};
use eframe::egui::{vec2, CentralPanel, ColorImage, Context, Image, Key, Sense, TextureHandle, TextureOptions};
use eframe::{App, CreationContext, Frame};
use log::{debug, info};

pub struct Renderer {
    debugger: Debugger,
    mosaic_texture: TextureHandle,
    vram: Vram,
    decoder: TileDecoder,
    settings: Settings,
    running: bool,
}

impl Renderer {
    pub fn new(cc: &CreationContext, vram: Vram, settings: Settings) -> Renderer {
        let mut decoder = TileDecoder::new(settings.mode, settings.grid);
        decode(&mut decoder, &vram, &settings);

        let mosaic_texture = cc.egui_ctx.load_texture(
            "mosaic_texture",
            to_color_image(decoder.mosaic_snapshot()),
            TextureOptions::NEAREST,
        );

        info!("Tile viewer ready, press F1 for the inspector and Space to pause");

        Renderer {
            debugger: Debugger::new(),
            mosaic_texture,
            vram,
            decoder,
            settings,
            running: true,
        }
    }

    pub fn update_mosaic(&mut self) {
        decode(&mut self.decoder, &self.vram, &self.settings);
        self.mosaic_texture
            .set(to_color_image(self.decoder.mosaic_snapshot()), TextureOptions::NEAREST);
    }

    pub fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::F1)) {
            self.debugger.toggle_window();
        }

        if ctx.input(|i| i.key_pressed(Key::Space)) {
            self.running = !self.running;
            debug!("Redecoding {}", if self.running { "resumed" } else { "paused" });
        }
    }
}

impl App for Renderer {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.handle_input(ctx);

        if self.running {
            self.update_mosaic();
        }

        let scale = self.settings.scale as f32;
        let mosaic = self.decoder.mosaic_snapshot();
        let size = vec2(mosaic.width() as f32 * scale, mosaic.height() as f32 * scale);

        CentralPanel::default().show(ctx, |ui| {
            let response = ui.add(
                Image::new(&self.mosaic_texture)
                    .fit_to_exact_size(size)
                    .sense(Sense::click()),
            );

            if !response.clicked() {
                return;
            }

            if let Some(pos) = response.interact_pointer_pos() {
                let local = (pos - response.rect.min) / scale;
                let tile = self.decoder.canvas().grid().tile_at(
                    local.x as usize,
                    local.y as usize,
                    self.decoder.canvas().bank_count(),
                );

                if let Some((bank, index)) = tile {
                    debug!("Selected tile {}:{:03}", bank, index);
                    self.debugger.select(bank, index);
                }
            }
        });

        self.debugger.update_ui(ctx, &self.decoder);

        ctx.request_repaint();
    }
}

fn decode(decoder: &mut TileDecoder, vram: &Vram, settings: &Settings) {
    let banks = vram.tile_banks();

    match &settings.palette {
        PaletteSource::Dmg { palette, register } => {
            decoder.decode_all(&banks, palette, *register, settings.mode)
        }
        PaletteSource::Cgb { cram, palette } => decoder.decode_all(&banks, cram, *palette, settings.mode),
    }
}

fn to_color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([buffer.width(), buffer.height()], buffer.as_rgba())
}
