use std::path::Path;

use lightbox_core::preview::{PreviewSurface, RenderFrame};

/// Surface that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<RenderFrame>,
    pub clears: usize,
    pub visible: bool,
}

impl RecordingSurface {
    pub fn last(&self) -> &RenderFrame {
        self.frames.last().expect("at least one rendered frame")
    }
}

impl PreviewSurface for RecordingSurface {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Write a blank RGBA PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::new(width, height)
        .save(path)
        .expect("write test PNG");
}
