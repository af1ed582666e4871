use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shapez_engine::layout::{msl, BlockLayout};
use shapez_engine::logging::{init_logging, LoggingConfig};
use shapez_engine::text::GlyphAtlas;
use shapez_engine::Target;

/// Build target selection for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum CliTarget {
    /// Main application blocks.
    #[default]
    Main,
    /// Reduced-feature RZ application blocks.
    Rz,
}

impl From<CliTarget> for Target {
    fn from(cli: CliTarget) -> Self {
        match cli {
            CliTarget::Main => Target::Main,
            CliTarget::Rz => Target::Rz,
        }
    }
}

/// Prints, verifies and exports the Shape-Z shader block layouts.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "shapez-layout", version)]
struct Options {
    /// Target whose blocks to print.
    #[arg(long, default_value = "main", value_enum)]
    target: CliTarget,

    /// Emit a Metal header instead of the layout table.
    #[arg(long)]
    msl: bool,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Rasterize printable ASCII from this font and report the atlas.
    #[arg(long, value_name = "FONT")]
    atlas: Option<PathBuf>,

    /// Raster size in pixels for --atlas.
    #[arg(long, default_value_t = 32.0, value_parser = parse_px, requires = "atlas")]
    px: f32,

    /// Blocks to print (default: the whole catalog).
    #[arg(value_name = "BLOCK")]
    blocks: Vec<String>,
}

fn parse_px(s: &str) -> Result<f32, String> {
    let px: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if px.is_finite() && px > 0.0 {
        Ok(px)
    } else {
        Err(format!("must be positive, got {px}"))
    }
}

/// Blocks named on the command line, or the whole catalog.
fn select_blocks(target: Target, names: &[String]) -> Result<Vec<&'static BlockLayout>> {
    if names.is_empty() {
        return Ok(target.catalog().to_vec());
    }
    names
        .iter()
        .map(|name| {
            target
                .block(name)
                .with_context(|| format!("{name} is not a block of the {target} target"))
        })
        .collect()
}

fn layout_table(layout: &BlockLayout) -> String {
    let mut out = format!("{} ({} bytes, align {})\n", layout.name, layout.size, layout.align());
    for field in layout.fields {
        out.push_str(&format!(
            "  {:<24} {:>5} {:>5}  {}\n",
            field.name,
            field.offset,
            field.size(),
            field.kind.msl_type()
        ));
    }
    out
}

fn report_atlas(path: &PathBuf, px: f32) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let atlas = GlyphAtlas::rasterize(&bytes, px, (' '..='~').chain(['°', '·']))
        .with_context(|| format!("rasterizing {}", path.display()))?;
    let (w, h) = atlas.size();
    let used = atlas.pixels().iter().filter(|&&p| p > 0).count();
    println!(
        "{}: {} glyphs at {px}px, line height {:.1}, {w}×{h} atlas, {used} lit texels",
        path.display(),
        atlas.font().glyphs.len(),
        atlas.font().line_height
    );
    Ok(())
}

fn run(opts: &Options) -> Result<()> {
    if let Some(path) = &opts.atlas {
        return report_atlas(path, opts.px);
    }

    let target = Target::from(opts.target);
    let layouts = select_blocks(target, &opts.blocks)?;
    for layout in &layouts {
        layout.verify().with_context(|| format!("{target} target"))?;
    }
    log::debug!("{} block(s) verified for {target}", layouts.len());

    if opts.msl {
        print!("{}", msl::emit_header(target.header_guard(), &layouts));
    } else {
        for layout in &layouts {
            println!("{}", layout_table(layout));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(if opts.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });
    run(&opts)
}
