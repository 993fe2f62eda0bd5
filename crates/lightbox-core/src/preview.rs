//! Preview controller: the state machine around the sizing engine.
//!
//! The controller owns the currently previewed image and its zoom, and draws
//! through a [`PreviewSurface`] handed to it at construction. Image loading
//! happens elsewhere; the controller only issues [`LoadRequest`]s and accepts
//! their outcome, discarding outcomes that arrive after the preview was
//! closed or another image was requested.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LightboxConfig;
use crate::error::Result;
use crate::fit::ViewportFit;
use crate::geometry::Size;
use crate::source::ImageSource;
use crate::watermark::WatermarkLayout;
use crate::zoom::Zoom;

/// Everything a surface needs to draw one preview frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Reference of the image to draw, as it was actually loaded.
    pub image: PathBuf,
    pub display: Size,
    pub zoom: Zoom,
    pub watermark: WatermarkLayout,
}

/// Rendering target of a [`PreviewController`].
pub trait PreviewSurface {
    /// Resize the surface to `frame.display` and draw the image with its watermark.
    fn render(&mut self, frame: &RenderFrame);

    /// Drop whatever is currently drawn.
    fn clear(&mut self);

    /// Show or hide the preview (modal and overlay).
    fn set_visible(&mut self, visible: bool);
}

/// Identifies one open request. Outcomes carrying an older ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoadTicket(u64);

/// Ask the loader to fetch `path` and report back with `ticket`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub path: PathBuf,
}

/// What to do after a load failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    /// Try again with the source's fallback reference.
    Retry(LoadRequest),
    /// No reference left; the preview went back to closed.
    GiveUp,
    /// The failure belongs to a request that is no longer current.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
enum PreviewState {
    Closed,
    Loading {
        ticket: LoadTicket,
        source: ImageSource,
        attempt: u32,
    },
    Open {
        source: ImageSource,
        image: PathBuf,
        fit: ViewportFit,
    },
}

pub struct PreviewController<S: PreviewSurface> {
    surface: S,
    config: LightboxConfig,
    state: PreviewState,
    next_ticket: u64,
}

impl<S: PreviewSurface> PreviewController<S> {
    pub fn new(surface: S, config: LightboxConfig) -> Self {
        Self {
            surface,
            config,
            state: PreviewState::Closed,
            next_ticket: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &LightboxConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PreviewState::Open { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PreviewState::Loading { .. })
    }

    /// Sizing state of the open preview.
    pub fn fit(&self) -> Option<&ViewportFit> {
        match &self.state {
            PreviewState::Open { fit, .. } => Some(fit),
            _ => None,
        }
    }

    pub fn zoom(&self) -> Option<Zoom> {
        self.fit().map(|fit| fit.zoom)
    }

    /// Source being loaded or shown.
    pub fn source(&self) -> Option<&ImageSource> {
        match &self.state {
            PreviewState::Closed => None,
            PreviewState::Loading { source, .. } | PreviewState::Open { source, .. } => {
                Some(source)
            }
        }
    }

    /// Replace the configuration. An open preview is fitted again from its
    /// natural size, since bounds and zoom limits may have changed.
    pub fn set_config(&mut self, config: LightboxConfig, window: Size) -> Result<()> {
        self.config = config;
        let PreviewState::Open { fit, .. } = &self.state else {
            return Ok(());
        };
        let zoom = Zoom::new(fit.zoom.value(), self.config.zoom);
        let natural = fit.natural;
        let bounds = self.config.chrome.fit_bounds(window)?;
        let max_width = self.config.chrome.max_display_width(window)?;
        let refit = ViewportFit::compute(natural, bounds, zoom, max_width)?;
        self.show(refit);
        Ok(())
    }

    /// Start opening `source`. Supersedes any pending load; an open preview
    /// is taken down until the new image arrives.
    pub fn request_open(&mut self, source: ImageSource) -> LoadRequest {
        if self.is_open() {
            self.hide_surface();
        }
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let path = source.primary.clone();
        debug!(?ticket, path = %path.display(), "Preview requested");
        self.state = PreviewState::Loading {
            ticket,
            source,
            attempt: 0,
        };
        LoadRequest { ticket, path }
    }

    /// Accept a successfully loaded image.
    ///
    /// Returns `Ok(false)` when the ticket is stale and nothing changed. On a
    /// sizing error the preview closes and the error is returned.
    pub fn on_loaded(&mut self, ticket: LoadTicket, natural: Size, window: Size) -> Result<bool> {
        let (source, attempt) = match &self.state {
            PreviewState::Loading {
                ticket: current,
                source,
                attempt,
            } if *current == ticket => (source.clone(), *attempt),
            _ => {
                debug!(?ticket, "Discarding stale image load");
                return Ok(false);
            }
        };

        let fit = match self.fit_at_unit_zoom(natural, window) {
            Ok(fit) => fit,
            Err(e) => {
                warn!(source = %source, error = %e, "Cannot size preview");
                self.close();
                return Err(e);
            }
        };

        let image = source
            .reference(attempt)
            .unwrap_or(source.primary.as_path())
            .to_path_buf();
        info!(
            image = %image.display(),
            natural = %fit.natural,
            display = %fit.display,
            "Preview opened"
        );
        self.state = PreviewState::Open {
            source,
            image,
            fit,
        };
        self.render_current();
        self.surface.set_visible(true);
        Ok(true)
    }

    /// Handle a failed load: retry once with the fallback, then give up.
    pub fn on_load_failed(&mut self, ticket: LoadTicket) -> LoadFailure {
        let PreviewState::Loading {
            ticket: current,
            source,
            attempt,
        } = &mut self.state
        else {
            return LoadFailure::Stale;
        };
        if *current != ticket {
            return LoadFailure::Stale;
        }

        let next = *attempt + 1;
        if let Some(path) = source.reference(next).map(|p| p.to_path_buf()) {
            *attempt = next;
            warn!(source = %source, fallback = %path.display(), "Image load failed, trying fallback");
            return LoadFailure::Retry(LoadRequest { ticket, path });
        }

        warn!(source = %source, "Image load failed");
        self.state = PreviewState::Closed;
        self.hide_surface();
        LoadFailure::GiveUp
    }

    /// One zoom step in. Returns whether a preview was re-rendered.
    pub fn zoom_in(&mut self, window: Size) -> Result<bool> {
        self.rezoom(window, Zoom::zoom_in)
    }

    /// One zoom step out. Returns whether a preview was re-rendered.
    pub fn zoom_out(&mut self, window: Size) -> Result<bool> {
        self.rezoom(window, Zoom::zoom_out)
    }

    /// Re-derive the width cap for a new window size, keeping base size and zoom.
    pub fn viewport_resized(&mut self, window: Size) -> Result<bool> {
        self.rezoom(window, |zoom| zoom)
    }

    /// Close the preview. Pending loads become stale.
    pub fn close(&mut self) {
        if self.state == PreviewState::Closed {
            return;
        }
        debug!("Preview closed");
        self.state = PreviewState::Closed;
        self.hide_surface();
    }

    fn hide_surface(&mut self) {
        self.surface.clear();
        self.surface.set_visible(false);
    }

    fn fit_at_unit_zoom(&self, natural: Size, window: Size) -> Result<ViewportFit> {
        let chrome = &self.config.chrome;
        let bounds = chrome.fit_bounds(window)?;
        let max_width = chrome.max_display_width(window)?;
        ViewportFit::compute(natural, bounds, Zoom::reset(self.config.zoom), max_width)
    }

    fn rezoom(&mut self, window: Size, step: impl FnOnce(Zoom) -> Zoom) -> Result<bool> {
        let PreviewState::Open { fit, .. } = &self.state else {
            return Ok(false);
        };
        let max_width = self.config.chrome.max_display_width(window)?;
        let next = fit.with_display(step(fit.zoom), max_width)?;
        if next == *fit {
            return Ok(false);
        }
        debug!(zoom = %next.zoom, display = %next.display, "Preview resized");
        self.show(next);
        Ok(true)
    }

    fn show(&mut self, next: ViewportFit) {
        if let PreviewState::Open { fit, .. } = &mut self.state {
            *fit = next;
            self.render_current();
        }
    }

    fn render_current(&mut self) {
        let PreviewState::Open { image, fit, .. } = &self.state else {
            return;
        };
        let frame = RenderFrame {
            image: image.clone(),
            display: fit.display,
            zoom: fit.zoom,
            watermark: self.config.watermark.layout(fit.display),
        };
        self.surface.render(&frame);
    }
}
