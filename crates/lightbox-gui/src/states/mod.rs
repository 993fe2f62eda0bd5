mod gallery;
mod surface;
mod ui;

pub use gallery::GalleryState;
pub use surface::TextureSurface;
pub use ui::UIState;
