use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid viewport bounds: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("Invalid size {0:?}: expected WIDTHxHEIGHT")]
    InvalidSize(String),

    #[error("Unsupported image file: {0}")]
    UnsupportedImage(PathBuf),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LightboxError>;
