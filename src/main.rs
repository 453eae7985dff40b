use clap::{Parser, ValueEnum};
use eframe::egui::ViewportBuilder;
use eframe::Theme;
use log::{info, LevelFilter};
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use vramview::error::{LoggerSnafu, ReadDumpSnafu, ViewerError};
use vramview::frontend::renderer::Renderer;
use vramview::frontend::settings::{load_cram, PaletteSource, Settings};
use vramview::memory::vram::Vram;
use vramview::tileset::{ColorMode, GridConfig};
use vramview::video::cram::{CgbPalette, PaletteKind};
use vramview::video::palette::{DmgPalette, DmgPaletteRegister};

#[derive(Clone, Copy, ValueEnum)]
enum PaletteArg {
    Bgp,
    Obp0,
    Obp1,
}

impl From<PaletteArg> for DmgPaletteRegister {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Bgp => DmgPaletteRegister::Bgp,
            PaletteArg::Obp0 => DmgPaletteRegister::Obp0,
            PaletteArg::Obp1 => DmgPaletteRegister::Obp1,
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Browse the tile data of a Game Boy VRAM dump")]
struct Args {
    /// Raw VRAM dump, 0x2000 bytes per bank
    dump: PathBuf,

    /// Decode both banks (color hardware)
    #[arg(long)]
    cgb: bool,

    /// Palette register the tiles are resolved through
    #[arg(long, value_enum, default_value_t = PaletteArg::Obp0)]
    palette: PaletteArg,

    #[arg(long, value_parser = parse_hex, default_value = "e4")]
    bgp: u8,

    #[arg(long, value_parser = parse_hex, default_value = "e4")]
    obp0: u8,

    #[arg(long, value_parser = parse_hex, default_value = "e4")]
    obp1: u8,

    /// 128 byte palette RAM dump, background palettes first
    #[arg(long)]
    cram: Option<PathBuf>,

    /// Object palette slot used with --cram
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..8))]
    cgb_slot: u8,

    #[arg(long, default_value_t = 3)]
    scale: usize,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(value.trim_start_matches("0x"), 16)
}

fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] [{}] {}", record.level(), record.target(), message))
        })
        .level(LevelFilter::Warn)
        .level_for("vramview", level)
        .chain(std::io::stderr())
        .apply()
}

fn read(path: &Path) -> Result<Vec<u8>, ViewerError> {
    std::fs::read(path).context(ReadDumpSnafu { path })
}

#[snafu::report]
fn main() -> Result<(), ViewerError> {
    let args = Args::parse();
    setup_logging(args.verbose).context(LoggerSnafu)?;

    let vram = Vram::from_dump(&read(&args.dump)?)?;

    let palette = match &args.cram {
        Some(path) => PaletteSource::Cgb {
            cram: load_cram(&read(path)?)?,
            palette: CgbPalette {
                kind: PaletteKind::Object,
                slot: args.cgb_slot,
            },
        },
        None => PaletteSource::Dmg {
            palette: DmgPalette::new(args.bgp, args.obp0, args.obp1),
            register: args.palette.into(),
        },
    };

    let settings = Settings {
        mode: if args.cgb { ColorMode::Color } else { ColorMode::Mono },
        palette,
        grid: GridConfig::default(),
        scale: args.scale.max(1),
    };
    settings.validate(&vram)?;

    let width = (settings.mode.bank_count() * settings.grid.bank_width() * settings.scale) as f32;
    let height = (settings.grid.height() * settings.scale) as f32;

    let theme = match dark_light::detect() {
        dark_light::Mode::Light => Theme::Light,
        _ => Theme::Dark,
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([width + 16.0, height + 16.0]),
        follow_system_theme: false,
        default_theme: theme,
        ..Default::default()
    };

    info!("Opening {}", args.dump.display());

    eframe::run_native(
        "vramview",
        options,
        Box::new(|cc| Box::new(Renderer::new(cc, vram, settings))),
    )
    .map_err(|e| ViewerError::Frontend { message: e.to_string() })
}
