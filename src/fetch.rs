use crate::error::{Error, Result};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Map a configured format name to the encoder and the file extension used
/// in output names.
pub fn output_format(name: &str) -> Result<(ImageFormat, &'static str)> {
    match name.to_ascii_lowercase().as_str() {
        "tiff" | "tif" => Ok((ImageFormat::Tiff, "tif")),
        "png" => Ok((ImageFormat::Png, "png")),
        "jpeg" | "jpg" => Ok((ImageFormat::Jpeg, "jpg")),
        other => Err(Error::UnknownFormat(other.to_string())),
    }
}

/// `{dir}/{padded}-{idx}.{ext}` — deterministic, collision-free across
/// (publication number, index) pairs.
pub fn output_path(dir: &Path, padded: &str, idx: &str, ext: &str) -> PathBuf {
    dir.join(format!("{padded}-{idx}.{ext}"))
}

/// Decode `bytes` as an image, normalize to three-channel RGB, and write it
/// under `dir` in the configured format. Creates the directory if missing;
/// overwrites an existing file silently.
pub fn convert_and_save(
    bytes: &[u8],
    dir: &Path,
    padded: &str,
    idx: &str,
    format_name: &str,
) -> Result<PathBuf> {
    let (format, ext) = output_format(format_name)?;

    let img = image::load_from_memory(bytes)?;
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = output_path(dir, padded, idx, ext);
    rgb.save_with_format(&path, format)?;
    Ok(path)
}
