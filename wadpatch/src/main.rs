use std::path::PathBuf;
use tracing::{info, Level};
use wadpatch::{default_output, list_lumps, patch_to_image, PaletteSource};

use anyhow::{bail, Result};
use clap::Parser;

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

/// Extracts a patch image from a Doom WAD archive
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// The WAD archive
    wad_file: PathBuf,

    /// Name of the patch lump to extract
    #[arg(short, long, default_value = libwad::DEFAULT_LUMP)]
    lump: String,

    /// The output file name (`.jpeg`, `.jpg` or `.png`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raw 768-byte palette file to use instead of the built-in Doom palette
    #[arg(short, long, conflicts_with = "playpal")]
    palette: Option<PathBuf>,

    /// Use the PLAYPAL lump of the archive instead of the built-in Doom palette
    #[arg(long)]
    playpal: bool,

    /// Print the archive directory and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    if cli.list {
        return list_lumps(&cli.wad_file, std::io::stdout().lock());
    }

    if cli.lump.is_empty() {
        bail!("Lump name must not be empty");
    }

    let palette = match (cli.palette, cli.playpal) {
        (Some(path), _) => PaletteSource::File(path),
        (None, true) => PaletteSource::Archive,
        (None, false) => PaletteSource::Builtin,
    };
    let output = cli.output.unwrap_or_else(|| default_output(&cli.lump));
    info!("output name: {}", output.display());

    let extracted = patch_to_image(&cli.wad_file, &cli.lump, &palette, &output)?;
    println!(
        "Extracted {} patch dimensions: width = {}, height = {}",
        cli.lump, extracted.width, extracted.height
    );
    println!("Image saved to {}", output.display());
    Ok(())
}
