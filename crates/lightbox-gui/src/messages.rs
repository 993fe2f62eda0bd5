use std::path::PathBuf;

use lightbox_core::config::LightboxConfig;
use lightbox_core::geometry::Size;
use lightbox_core::preview::LoadTicket;
use lightbox_core::source::ImageSource;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Scan a folder and decode thumbnails for every image in it.
    LoadGallery { dir: PathBuf },

    /// Decode one image for the preview.
    LoadPreview { ticket: LoadTicket, path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A folder was chosen in the file dialog.
    FolderPicked {
        dir: PathBuf,
    },
    Gallery {
        dir: PathBuf,
        sources: Vec<ImageSource>,
    },
    Thumbnail {
        dir: PathBuf,
        index: usize,
        image: egui::ColorImage,
    },
    PreviewLoaded {
        ticket: LoadTicket,
        path: PathBuf,
        natural: Size,
        image: egui::ColorImage,
    },
    PreviewFailed {
        ticket: LoadTicket,
        path: PathBuf,
        message: String,
    },
    ConfigImported {
        config: LightboxConfig,
    },
    Error {
        message: String,
    },
}
