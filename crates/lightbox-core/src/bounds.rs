use serde::{Deserialize, Serialize};

use crate::consts::{
    DISPLAY_MARGIN_X, DISPLAY_MAX_WIDTH, FIT_MARGIN_X, FIT_MARGIN_Y, FIT_MAX_HEIGHT,
    FIT_MAX_WIDTH,
};
use crate::error::{LightboxError, Result};
use crate::geometry::Size;

/// Space taken by the window chrome around the preview, and the absolute
/// caps that apply however large the window gets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub fit_max_width: u32,
    pub fit_max_height: u32,
    pub fit_margin_x: u32,
    pub fit_margin_y: u32,
    pub display_max_width: u32,
    pub display_margin_x: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            fit_max_width: FIT_MAX_WIDTH,
            fit_max_height: FIT_MAX_HEIGHT,
            fit_margin_x: FIT_MARGIN_X,
            fit_margin_y: FIT_MARGIN_Y,
            display_max_width: DISPLAY_MAX_WIDTH,
            display_margin_x: DISPLAY_MARGIN_X,
        }
    }
}

impl ChromeConfig {
    /// Bounds the base fit must stay inside for a window of this size.
    pub fn fit_bounds(&self, window: Size) -> Result<Size> {
        let bounds = Size::new(
            self.fit_max_width
                .min(window.width.saturating_sub(self.fit_margin_x)),
            self.fit_max_height
                .min(window.height.saturating_sub(self.fit_margin_y)),
        );
        if bounds.is_empty() {
            return Err(LightboxError::InvalidViewport {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(bounds)
    }

    /// Widest the rendered preview may be for a window of this size.
    ///
    /// Depends on the live window width, so callers derive it again on every
    /// render instead of keeping it around.
    pub fn max_display_width(&self, window: Size) -> Result<u32> {
        let width = self
            .display_max_width
            .min(window.width.saturating_sub(self.display_margin_x));
        if width == 0 {
            return Err(LightboxError::InvalidViewport {
                width: 0,
                height: window.height,
            });
        }
        Ok(width)
    }
}
