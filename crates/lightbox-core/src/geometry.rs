use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LightboxError;

/// A pixel size. Used for natural image sizes, viewport bounds and render targets alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height. Meaningless for empty sizes.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Strictly taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn fits_within(&self, bounds: Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }

    /// Multiply both dimensions by `factor`, rounding half away from zero
    /// and never going below one pixel.
    pub(crate) fn scaled(&self, factor: f64) -> Size {
        Size {
            width: scale_dimension(self.width, factor),
            height: scale_dimension(self.height, factor),
        }
    }
}

fn scale_dimension(value: u32, factor: f64) -> u32 {
    let scaled = (value as f64 * factor).round();
    // `as` saturates on overflow; the lower bound keeps the output drawable.
    (scaled as u32).max(1)
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = LightboxError;

    /// Parse `"WIDTHxHEIGHT"` (also accepts `X` and `×` as separator).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LightboxError::InvalidSize(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Ok(Size { width, height })
    }
}
