use std::path::{Path, PathBuf};

use lightbox_core::source::ImageSource;

/// Folder currently shown as a gallery, with its decoded thumbnails.
#[derive(Default)]
pub struct GalleryState {
    pub dir: Option<PathBuf>,
    pub sources: Vec<ImageSource>,
    /// One slot per source; filled in as the worker decodes thumbnails.
    pub thumbnails: Vec<Option<egui::TextureHandle>>,
    /// Folder requested but not scanned yet.
    pub loading: bool,
}

impl GalleryState {
    pub fn begin_loading(&mut self, dir: PathBuf) {
        self.dir = Some(dir);
        self.sources.clear();
        self.thumbnails.clear();
        self.loading = true;
    }

    /// Replace the tiles. Ignored when another folder was requested meanwhile.
    pub fn set_sources(&mut self, dir: &Path, sources: Vec<ImageSource>) -> bool {
        if !self.is_current(dir) {
            return false;
        }
        self.thumbnails = vec![None; sources.len()];
        self.sources = sources;
        self.loading = false;
        true
    }

    pub fn set_thumbnail(&mut self, dir: &Path, index: usize, texture: egui::TextureHandle) {
        if !self.is_current(dir) {
            return;
        }
        if let Some(slot) = self.thumbnails.get_mut(index) {
            *slot = Some(texture);
        }
    }

    pub fn is_current(&self, dir: &Path) -> bool {
        self.dir.as_deref() == Some(dir)
    }
}
