use serde::{Deserialize, Serialize};

use crate::consts::{
    WATERMARK_COLOR, WATERMARK_INSET_BOTTOM, WATERMARK_INSET_RIGHT, WATERMARK_MIN_FONT_SIZE,
    WATERMARK_OPACITY, WATERMARK_TEXT, WATERMARK_WIDTH_DIVISOR,
};
use crate::geometry::Size;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    pub text: String,
    /// RGB colour of the text; `opacity` is applied on top.
    pub color: [u8; 3],
    pub opacity: f32,
    pub width_divisor: u32,
    pub min_font_size: u32,
    pub inset_right: u32,
    pub inset_bottom: u32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: WATERMARK_TEXT.to_string(),
            color: WATERMARK_COLOR,
            opacity: WATERMARK_OPACITY,
            width_divisor: WATERMARK_WIDTH_DIVISOR,
            min_font_size: WATERMARK_MIN_FONT_SIZE,
            inset_right: WATERMARK_INSET_RIGHT,
            inset_bottom: WATERMARK_INSET_BOTTOM,
        }
    }
}

/// Where and how large to draw the watermark on a rendered surface.
///
/// `anchor_x`/`anchor_y` address the right end of the text baseline, in
/// surface pixels from the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatermarkLayout {
    pub text: String,
    pub font_size: u32,
    pub anchor_x: u32,
    pub anchor_y: u32,
    pub color: [u8; 3],
    pub opacity: f32,
}

impl WatermarkConfig {
    pub fn layout(&self, surface: Size) -> WatermarkLayout {
        let divisor = self.width_divisor.max(1) as f64;
        let proportional = (surface.width as f64 / divisor).round() as u32;
        WatermarkLayout {
            text: self.text.clone(),
            font_size: proportional.max(self.min_font_size),
            anchor_x: surface.width.saturating_sub(self.inset_right),
            anchor_y: surface.height.saturating_sub(self.inset_bottom),
            color: self.color,
            opacity: self.opacity.clamp(0.0, 1.0),
        }
    }
}
