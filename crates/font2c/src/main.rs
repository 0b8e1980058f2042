//! Command line tool converting BDF bitmap fonts into C arrays for
//! embedded firmware.

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use font2c_engine::{BdfFont, ByteOrder, Glyph, GlyphEncoder, c_header};

use crate::config::FileConfig;

mod config;
mod ranges;

#[derive(Parser)]
#[command(version, about = "Convert BDF bitmap fonts into C arrays for embedded firmware.")]
struct Cli {
    #[arg(help = "Input .bdf font file.")]
    font: PathBuf,

    #[arg(help = "Output header file. Gets overwritten or created.", short, long, default_value = "outArr.h")]
    output: PathBuf,

    #[arg(help = "TOML file with transform settings; explicit flags override it.", short, long)]
    config: Option<PathBuf>,

    #[arg(help = "Code point range, e.g. '0x20-0x7E' or '65'. May be repeated.", short, long)]
    range: Vec<String>,

    #[arg(help = "Pixel rows added above each glyph (negative trims).", long, allow_negative_numbers = true)]
    pad_top: Option<i32>,

    #[arg(help = "Pixel rows added below each glyph (negative trims).", long, allow_negative_numbers = true)]
    pad_bottom: Option<i32>,

    #[arg(help = "Pixel columns added left of each glyph (negative trims).", long, allow_negative_numbers = true)]
    pad_left: Option<i32>,

    #[arg(help = "Pixel columns added right of each glyph (negative trims).", long, allow_negative_numbers = true)]
    pad_right: Option<i32>,

    #[arg(help = "Mirror glyphs left-right.", long, default_value_t = false)]
    mirror_horizontal: bool,

    #[arg(help = "Mirror glyphs top-bottom.", long, default_value_t = false)]
    mirror_vertical: bool,

    #[arg(help = "Net clockwise quarter turns (negative for counter-clockwise).", long, allow_negative_numbers = true)]
    rotate: Option<i32>,

    #[arg(help = "Element order in the output array.", long, value_enum)]
    order: Option<OrderArg>,

    #[arg(help = "Bytes per array element (1-4).", long)]
    element_size: Option<u32>,

    #[arg(help = "Name of the generated entry struct.", long)]
    struct_name: Option<String>,

    #[arg(help = "Name of the generated array.", long)]
    array_name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Row,
    Column,
}

fn main() -> anyhow::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;
    run(Cli::parse())
}

fn run(args: Cli) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut transform = file_config.transform;
    if let Some(pad) = args.pad_top {
        transform.set_padding_top(pad);
    }
    if let Some(pad) = args.pad_bottom {
        transform.set_padding_bottom(pad);
    }
    if let Some(pad) = args.pad_left {
        transform.set_padding_left(pad);
    }
    if let Some(pad) = args.pad_right {
        transform.set_padding_right(pad);
    }
    if args.mirror_horizontal {
        transform.set_mirror_horizontal(true);
    }
    if args.mirror_vertical {
        transform.set_mirror_vertical(true);
    }
    if let Some(turns) = args.rotate {
        transform.rotation = 0;
        for _ in 0..turns.abs() {
            if turns > 0 {
                transform.rotate_cw();
            } else {
                transform.rotate_ccw();
            }
        }
    }
    if let Some(order) = args.order {
        transform.set_byte_order(match order {
            OrderArg::Row => ByteOrder::RowMajor,
            OrderArg::Column => ByteOrder::ColumnMajor,
        });
    }
    if let Some(size) = args.element_size {
        transform.set_element_size(size)?;
    }

    let mut encoder = GlyphEncoder::new(transform)?;
    if let Some(name) = args.struct_name.or(file_config.struct_name) {
        encoder.set_struct_name(name);
    }
    if let Some(name) = args.array_name.or(file_config.array_name) {
        encoder.set_array_name(name);
    }

    let range_specs = if !args.range.is_empty() {
        args.range
    } else if !file_config.ranges.is_empty() {
        file_config.ranges
    } else {
        vec!["0x0000-0x007F".to_string()]
    };
    let code_points = ranges::parse_ranges(&range_specs)?;

    let font = BdfFont::load(&args.font).with_context(|| format!("Failed to load font '{}'", args.font.display()))?;
    let metrics = font.metrics();
    log::info!(
        "This font's global size is {} x {} (pixel), it contains {} glyphs.",
        metrics.width,
        metrics.height,
        metrics.glyph_count
    );

    let mut glyphs: Vec<Glyph> = Vec::with_capacity(code_points.len());
    let mut missing = 0usize;
    for code_point in code_points {
        match font.glyph(code_point) {
            Some(glyph) => glyphs.push(glyph),
            None => {
                log::warn!("No glyph for code point 0x{code_point:04X}, skipping");
                missing += 1;
            }
        }
    }

    let file = File::create(&args.output).with_context(|| format!("Failed to create output file '{}'", args.output.display()))?;
    let mut out = BufWriter::new(file);
    c_header::write_font(&mut out, &encoder, &glyphs)?;

    log::info!(
        "Wrote {} glyph entries to '{}' ({} requested code points not in font)",
        glyphs.len(),
        args.output.display(),
        missing
    );
    Ok(())
}
