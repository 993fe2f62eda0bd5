use std::path::PathBuf;

use lightbox_core::preview::{PreviewSurface, RenderFrame};

/// Preview surface backed by an egui texture.
///
/// The app stages the decoded texture before handing the load to the
/// controller; `render` adopts it when the frame names the same image.
#[derive(Default)]
pub struct TextureSurface {
    staged: Option<(PathBuf, egui::TextureHandle)>,
    current: Option<(egui::TextureHandle, RenderFrame)>,
    visible: bool,
}

impl TextureSurface {
    pub fn stage(&mut self, path: PathBuf, texture: egui::TextureHandle) {
        self.staged = Some((path, texture));
    }

    /// Drop a staged texture the controller did not take.
    pub fn discard_staged(&mut self) {
        self.staged = None;
    }

    pub fn current(&self) -> Option<(&egui::TextureHandle, &RenderFrame)> {
        self.current.as_ref().map(|(texture, frame)| (texture, frame))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl PreviewSurface for TextureSurface {
    fn render(&mut self, frame: &RenderFrame) {
        match self.staged.take() {
            Some((path, texture)) if path == frame.image => {
                self.current = Some((texture, frame.clone()));
            }
            staged => {
                self.staged = staged;
                if let Some((_, current)) = &mut self.current {
                    *current = frame.clone();
                }
            }
        }
    }

    fn clear(&mut self) {
        self.staged = None;
        self.current = None;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
