use serde::{Deserialize, Serialize};

use crate::consts::{VIDEO_MAX_HEIGHT, VIDEO_MAX_HEIGHT_FRACTION};
use crate::geometry::Size;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Share of the window height a vertical video may take.
    pub max_height_fraction: f32,
    /// Absolute height cap for vertical videos.
    pub max_height: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            max_height_fraction: VIDEO_MAX_HEIGHT_FRACTION,
            max_height: VIDEO_MAX_HEIGHT,
        }
    }
}

/// How a video card should be laid out once its metadata is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoPresentation {
    /// Regular landscape/square card, or metadata not available yet.
    Standard,
    /// Portrait video: contain-fit, no taller than `max_height`.
    Vertical { max_height: u32 },
}

impl VideoPresentation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, VideoPresentation::Vertical { .. })
    }

    /// Rendered size of a video with this presentation.
    ///
    /// Vertical videos are scaled down (never up) to `max_height`; standard
    /// videos keep their natural size and are left to the card layout.
    pub fn render_size(&self, video: Size) -> Size {
        match *self {
            VideoPresentation::Vertical { max_height } if video.height > max_height => {
                let width = (video.width as f64 * max_height as f64 / video.height as f64)
                    .round() as u32;
                Size::new(width.max(1), max_height)
            }
            _ => video,
        }
    }
}

impl VideoConfig {
    /// Classify a video from its natural size.
    ///
    /// Zero dimensions mean the metadata has not loaded; such videos stay
    /// [`VideoPresentation::Standard`].
    pub fn classify(&self, video: Size, window_height: u32) -> VideoPresentation {
        if video.is_empty() || !video.is_portrait() {
            return VideoPresentation::Standard;
        }
        let by_window = (window_height as f64 * self.max_height_fraction as f64).round() as u32;
        VideoPresentation::Vertical {
            max_height: by_window.min(self.max_height).max(1),
        }
    }
}
