use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Range and step size of the zoom controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: ZOOM_MIN,
            max: ZOOM_MAX,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomLimits {
    /// Saturate `value` into `[min, max]`. Non-finite input falls back to 1.0
    /// (itself clamped, in case 1.0 lies outside a custom range).
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { 1.0 };
        // Not `f64::clamp`: a hand-edited config may carry min > max.
        value.max(self.min).min(self.max)
    }
}

/// Magnification applied on top of the base fit.
///
/// A `Zoom` always holds a value inside the limits it was created with;
/// requests outside the range saturate at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ZoomRepr", into = "ZoomRepr")]
pub struct Zoom {
    value: f64,
    limits: ZoomLimits,
}

/// Serialized form; deserializing goes through [`Zoom::new`] so stored
/// values are clamped again.
#[derive(Serialize, Deserialize)]
struct ZoomRepr {
    value: f64,
    #[serde(default)]
    limits: ZoomLimits,
}

impl From<ZoomRepr> for Zoom {
    fn from(repr: ZoomRepr) -> Self {
        Zoom::new(repr.value, repr.limits)
    }
}

impl From<Zoom> for ZoomRepr {
    fn from(zoom: Zoom) -> Self {
        ZoomRepr {
            value: zoom.value,
            limits: zoom.limits,
        }
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::reset(ZoomLimits::default())
    }
}

impl Zoom {
    pub fn new(value: f64, limits: ZoomLimits) -> Self {
        Self {
            value: limits.clamp(value),
            limits,
        }
    }

    /// Zoom 1.0, the state every freshly opened preview starts in.
    pub fn reset(limits: ZoomLimits) -> Self {
        Self::new(1.0, limits)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.value + self.limits.step, self.limits)
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.value - self.limits.step, self.limits)
    }

    pub fn at_max(&self) -> bool {
        self.value >= self.limits.max
    }

    pub fn at_min(&self) -> bool {
        self.value <= self.limits.min
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.value * 100.0)
    }
}
