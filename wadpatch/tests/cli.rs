use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use mktemp::Temp;
use wadpatch::{default_output, list_lumps, patch_to_image, Extracted, PaletteSource};

/// `PWAD` with a `PLAYPAL` lump and a 2x2 `SKY1` patch (indexes 1, 2 / 3, 4 by column)
fn sky1_wad() -> Vec<u8> {
    let mut playpal = vec![0u8; 768];
    playpal[3..15].copy_from_slice(&[10, 0, 0, 0, 20, 0, 0, 0, 30, 40, 40, 40]);

    let mut sky1 = Vec::new();
    for v in [2i16, 2, 0, 0] {
        sky1.extend(v.to_le_bytes());
    }
    sky1.extend(16i32.to_le_bytes());
    sky1.extend(22i32.to_le_bytes());
    sky1.extend([0, 2, 1, 2, 0, 0xFF]);
    sky1.extend([0, 2, 3, 4, 0, 0xFF]);

    let mut wad = Vec::new();
    wad.extend(b"PWAD");
    wad.extend(2i32.to_le_bytes());
    wad.extend(i32::try_from(12 + playpal.len() + sky1.len()).unwrap().to_le_bytes());
    let playpal_offset = i32::try_from(wad.len()).unwrap();
    wad.extend(&playpal);
    let sky1_offset = i32::try_from(wad.len()).unwrap();
    wad.extend(&sky1);
    for (offset, size, name) in [
        (playpal_offset, playpal.len(), *b"PLAYPAL\0"),
        (sky1_offset, sky1.len(), *b"SKY1\0\0\0\0"),
    ] {
        wad.extend(offset.to_le_bytes());
        wad.extend(i32::try_from(size).unwrap().to_le_bytes());
        wad.extend(name);
    }
    wad
}

fn write_wad(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("test.wad");
    fs::write(&path, sky1_wad())?;
    Ok(path)
}

#[test]
fn extract_with_archive_palette() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let output = root.join("sky1.png");

    let extracted = patch_to_image(&wad, "SKY1", &PaletteSource::Archive, &output)?;
    assert_eq!(
        extracted,
        Extracted {
            width: 2,
            height: 2
        }
    );

    let img = image::open(&output)?.into_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [10, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 30]);
    assert_eq!(img.get_pixel(0, 1).0, [0, 20, 0]);
    assert_eq!(img.get_pixel(1, 1).0, [40, 40, 40]);
    Ok(())
}

#[test]
fn extract_with_palette_file() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let palette = root.join("pal.lmp");
    fs::write(&palette, [7u8; 768])?;
    let output = root.join("sky1.png");

    patch_to_image(&wad, "SKY1", &PaletteSource::File(palette), &output)?;
    let img = image::open(&output)?.into_rgb8();
    assert!(img.pixels().all(|p| p.0 == [7, 7, 7]));
    Ok(())
}

#[test]
fn extract_jpeg_with_builtin_palette() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let output = root.join("sky1.jpeg");

    patch_to_image(&wad, "SKY1", &PaletteSource::Builtin, &output)?;
    let img = image::open(&output)?;
    assert_eq!((img.width(), img.height()), (2, 2));
    Ok(())
}

#[test]
fn missing_lump_fails() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let output = root.join("sky2.jpeg");

    let err = patch_to_image(&wad, "SKY2", &PaletteSource::Builtin, &output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<libwad::Error>(),
        Some(libwad::Error::LumpNotFound { .. })
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn unsupported_output_extension() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let output = root.join("sky1.bmp");
    assert!(patch_to_image(&wad, "SKY1", &PaletteSource::Builtin, &output).is_err());
    Ok(())
}

#[test]
fn list_directory() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let mut out = Vec::new();
    list_lumps(&wad, &mut out)?;
    let out = String::from_utf8(out)?;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("PWAD with 2 lumps"));
    assert!(lines[1].contains("PLAYPAL"));
    assert!(lines[2].contains("SKY1"));
    Ok(())
}

#[test]
fn default_output_name() {
    assert_eq!(default_output("SKY1"), PathBuf::from("sky1.jpeg"));
}

#[test]
fn binary_exit_codes() -> anyhow::Result<()> {
    let dir = Temp::new_dir()?;
    let root: &Path = dir.as_ref();
    let wad = write_wad(root)?;
    let bin = env!("CARGO_BIN_EXE_wadpatch");

    let status = Command::new(bin).arg("-v").output()?.status;
    assert!(!status.success(), "missing argument must fail");

    let status = Command::new(bin)
        .arg(root.join("nope.wad"))
        .output()?
        .status;
    assert!(!status.success(), "unopenable file must fail");

    let status = Command::new(bin)
        .arg(&wad)
        .args(["--lump", "SKY2"])
        .current_dir(root)
        .output()?
        .status;
    assert!(!status.success(), "missing lump must fail");

    let out = Command::new(bin)
        .arg(&wad)
        .current_dir(root)
        .output()?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("width = 2, height = 2"), "{stdout}");
    assert!(root.join("sky1.jpeg").exists());
    Ok(())
}
