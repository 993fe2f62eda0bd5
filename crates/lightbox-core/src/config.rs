use serde::{Deserialize, Serialize};

use crate::bounds::ChromeConfig;
use crate::video::VideoConfig;
use crate::watermark::WatermarkConfig;
use crate::zoom::ZoomLimits;

/// Every tunable of the preview, grouped the way it is written to TOML.
///
/// All sections are optional on input; missing ones take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub zoom: ZoomLimits,
    pub chrome: ChromeConfig,
    pub watermark: WatermarkConfig,
    pub video: VideoConfig,
}
