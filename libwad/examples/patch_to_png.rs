/// Demonstrates how to create a png file from a patch lump
/// using the [`image`] crate
///
use libwad::{
    output::{write_rgb, OutputFormat},
    Palette, Wad,
};

fn main() -> anyhow::Result<()> {
    let Some(wad_file) = std::env::args().nth(1) else {
        anyhow::bail!("usage: patch_to_png <wad file> [lump name]");
    };
    let lump_name = std::env::args()
        .nth(2)
        .unwrap_or_else(|| libwad::DEFAULT_LUMP.to_owned());

    let mut wad = Wad::open(wad_file)?;
    let entry = wad.lump(&lump_name)?;
    let patch = wad.read_patch(&entry)?;

    // prefer the archive's own palette, fall back to Doom's
    let palette = wad.palette().unwrap_or(Palette::DOOM);
    let rgb = palette.apply(patch.pixels());

    let output = format!("{}.png", lump_name.to_ascii_lowercase());
    write_rgb(&output, patch.width(), patch.height(), &rgb, OutputFormat::Png)?;
    println!("{}x{} patch written to {output}", patch.width(), patch.height());
    Ok(())
}
