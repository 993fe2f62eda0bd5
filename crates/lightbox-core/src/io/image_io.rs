use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::consts::{IMAGE_EXTENSIONS, THUMBNAIL_DIR};
use crate::error::{LightboxError, Result};
use crate::geometry::Size;
use crate::source::ImageSource;

/// True when the file extension names an image format the gallery shows.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
}

/// Natural size of an image file, read from its header only.
pub fn probe_dimensions(path: &Path) -> Result<Size> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Err(LightboxError::UnsupportedImage(path.to_path_buf()));
    }
    let (width, height) = reader.into_dimensions()?;
    let size = Size::new(width, height);
    if size.is_empty() {
        return Err(LightboxError::InvalidImageDimensions { width, height });
    }
    Ok(size)
}

/// Decode an image file into 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(LightboxError::InvalidImageDimensions {
            width: rgba.width(),
            height: rgba.height(),
        });
    }
    Ok(rgba)
}

/// List the images of a gallery folder, sorted by file name.
///
/// An image `dir/name.ext` gets `dir/thumbs/name.ext` as fallback when that
/// file exists.
pub fn scan_gallery(dir: &Path) -> Result<Vec<ImageSource>> {
    let thumbs = dir.join(THUMBNAIL_DIR);
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();
    paths.sort();

    let sources: Vec<ImageSource> = paths
        .into_iter()
        .map(|path| {
            let thumb = path.file_name().map(|name| thumbs.join(name));
            match thumb {
                Some(thumb) if thumb.is_file() => ImageSource::new(path).with_fallback(thumb),
                _ => ImageSource::new(path),
            }
        })
        .collect();

    debug!(dir = %dir.display(), count = sources.len(), "Gallery scanned");
    Ok(sources)
}
