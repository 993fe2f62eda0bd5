use std::path::PathBuf;
use std::sync::mpsc;

use lightbox_core::config::LightboxConfig;
use lightbox_core::error::Result;
use lightbox_core::geometry::Size;
use lightbox_core::preview::{LoadFailure, LoadRequest, PreviewController};
use tracing::warn;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{GalleryState, TextureSurface, UIState};
use crate::worker;

pub struct LightboxApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub gallery: GalleryState,
    pub preview: PreviewController<TextureSurface>,
    /// Window size seen on the previous frame, in points.
    pub window: Option<Size>,
}

impl LightboxApp {
    pub fn new(ctx: &egui::Context, initial_dir: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            gallery: GalleryState::default(),
            preview: PreviewController::new(TextureSurface::default(), LightboxConfig::default()),
            window: None,
        };
        if let Some(dir) = initial_dir {
            app.open_folder(dir);
        }
        app
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn open_folder(&mut self, dir: PathBuf) {
        self.preview.close();
        self.gallery.begin_loading(dir.clone());
        self.send_command(WorkerCommand::LoadGallery { dir });
    }

    /// Start previewing the gallery tile at `index`.
    pub fn open_tile(&mut self, index: usize) {
        let Some(source) = self.gallery.sources.get(index).cloned() else {
            return;
        };
        let request = self.preview.request_open(source);
        self.request_load(request);
    }

    fn request_load(&self, request: LoadRequest) {
        self.send_command(WorkerCommand::LoadPreview {
            ticket: request.ticket,
            path: request.path,
        });
    }

    /// Log a failed preview operation; successful ones need no feedback.
    pub fn report(&mut self, result: Result<bool>) {
        if let Err(e) = result {
            warn!(error = %e, "Preview update failed");
            self.ui_state.add_log(format!("ERROR: {e}"));
        }
    }

    /// Track the window size and keep an open preview inside it.
    fn sync_window(&mut self, window: Size) {
        if self.window == Some(window) {
            return;
        }
        self.window = Some(window);
        let result = self.preview.viewport_resized(window);
        self.report(result);
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context, window: Size) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FolderPicked { dir } => self.open_folder(dir),
                WorkerResult::Gallery { dir, sources } => {
                    let count = sources.len();
                    if self.gallery.set_sources(&dir, sources) {
                        self.ui_state
                            .add_log(format!("Opened: {} ({count} images)", dir.display()));
                    }
                }
                WorkerResult::Thumbnail { dir, index, image } => {
                    if self.gallery.is_current(&dir) {
                        let texture = ctx.load_texture(
                            format!("thumb-{index}"),
                            image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.gallery.set_thumbnail(&dir, index, texture);
                    }
                }
                WorkerResult::PreviewLoaded {
                    ticket,
                    path,
                    natural,
                    image,
                } => {
                    let texture =
                        ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
                    self.preview.surface_mut().stage(path, texture);
                    let result = self.preview.on_loaded(ticket, natural, window);
                    if !matches!(result, Ok(true)) {
                        self.preview.surface_mut().discard_staged();
                    }
                    self.report(result);
                }
                WorkerResult::PreviewFailed {
                    ticket,
                    path,
                    message,
                } => match self.preview.on_load_failed(ticket) {
                    LoadFailure::Retry(request) => {
                        self.ui_state.add_log(format!(
                            "Image load failed: {} ({message}), using thumbnail",
                            path.display()
                        ));
                        self.request_load(request);
                    }
                    LoadFailure::GiveUp => {
                        self.ui_state.add_log(format!(
                            "Image load failed: {} ({message})",
                            path.display()
                        ));
                    }
                    LoadFailure::Stale => {}
                },
                WorkerResult::ConfigImported { config } => {
                    let result = self.preview.set_config(config, window);
                    self.report(result.map(|()| true));
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }
}

/// Current window size in points.
pub fn window_size(ctx: &egui::Context) -> Size {
    let rect = ctx.screen_rect();
    Size::new(rect.width().round() as u32, rect.height().round() as u32)
}

impl eframe::App for LightboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let window = window_size(ctx);
        self.poll_results(ctx, window);
        self.sync_window(window);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::gallery::show(ctx, self);
        panels::preview::show(ctx, self, window);

        if self.ui_state.show_about {
            egui::Window::new("About Lightbox")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Lightbox");
                        ui.label("Gallery Image Preview");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
