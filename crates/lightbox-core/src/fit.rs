//! Preview sizing engine.
//!
//! Two pure functions turn a source image's natural size into the pixel size
//! of its preview surface:
//!
//! 1. [`compute_base_fit`] shrinks the image into the available bounds
//!    (never enlarging it), giving the size shown at zoom 1.0.
//! 2. [`compute_display_size`] applies the user zoom to that base size and
//!    enforces the absolute width cap, scaling both axes together.
//!
//! [`ViewportFit`] bundles inputs and outputs of one computation so callers
//! can keep it as plain state and recompute from it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LightboxError, Result};
use crate::geometry::Size;
use crate::zoom::Zoom;

/// Size at which `natural` is shown at zoom 1.0 inside `bounds`.
///
/// The ratio is `min(bounds.w / natural.w, bounds.h / natural.h, 1)`, so the
/// result fits inside `bounds`, keeps the aspect ratio within rounding, and is
/// exactly `natural` when the image already fits.
pub fn compute_base_fit(natural: Size, bounds: Size) -> Result<Size> {
    if natural.is_empty() {
        return Err(LightboxError::InvalidImageDimensions {
            width: natural.width,
            height: natural.height,
        });
    }
    if bounds.is_empty() {
        return Err(LightboxError::InvalidViewport {
            width: bounds.width,
            height: bounds.height,
        });
    }

    if natural.fits_within(bounds) {
        return Ok(natural);
    }

    let ratio = (bounds.width as f64 / natural.width as f64)
        .min(bounds.height as f64 / natural.height as f64)
        .min(1.0);
    let base = natural.scaled(ratio);

    // Rounding can overshoot by half a pixel on the non-limiting axis.
    Ok(Size::new(
        base.width.min(bounds.width),
        base.height.min(bounds.height),
    ))
}

/// Size at which a preview with the given base size is rendered under `zoom`.
///
/// When the zoomed width exceeds `max_display_width`, both dimensions are
/// scaled by `max_display_width / width` and rounded again.
pub fn compute_display_size(base: Size, zoom: Zoom, max_display_width: u32) -> Result<Size> {
    if base.is_empty() {
        return Err(LightboxError::InvalidImageDimensions {
            width: base.width,
            height: base.height,
        });
    }
    if max_display_width == 0 {
        return Err(LightboxError::InvalidViewport {
            width: 0,
            height: base.height,
        });
    }

    let raw = base.scaled(zoom.value());
    if raw.width <= max_display_width {
        return Ok(raw);
    }

    let factor = max_display_width as f64 / raw.width as f64;
    let capped = raw.scaled(factor);
    debug!(%raw, %capped, max_display_width, "Display size capped");
    Ok(Size::new(capped.width.min(max_display_width), capped.height))
}

/// One complete sizing computation: natural size in, display size out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportFit {
    pub natural: Size,
    pub bounds: Size,
    pub zoom: Zoom,
    pub base: Size,
    pub max_display_width: u32,
    pub display: Size,
}

impl ViewportFit {
    /// Fit `natural` into `bounds`, then apply `zoom` under the width cap.
    pub fn compute(natural: Size, bounds: Size, zoom: Zoom, max_display_width: u32) -> Result<Self> {
        let base = compute_base_fit(natural, bounds)?;
        let display = compute_display_size(base, zoom, max_display_width)?;
        Ok(Self {
            natural,
            bounds,
            zoom,
            base,
            max_display_width,
            display,
        })
    }

    /// Same base size under a new zoom and/or width cap.
    pub fn with_display(&self, zoom: Zoom, max_display_width: u32) -> Result<Self> {
        let display = compute_display_size(self.base, zoom, max_display_width)?;
        Ok(Self {
            zoom,
            max_display_width,
            display,
            ..*self
        })
    }

    /// Whether the width cap reduced the zoomed size.
    pub fn is_capped(&self) -> bool {
        self.base.scaled(self.zoom.value()).width > self.max_display_width
    }
}
