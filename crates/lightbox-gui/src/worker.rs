use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use image::imageops;
use lightbox_core::fit::compute_base_fit;
use lightbox_core::geometry::Size;
use lightbox_core::io::image_io::{load_rgba, scan_gallery};
use lightbox_core::preview::LoadTicket;
use lightbox_core::source::ImageSource;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Longest side of a gallery thumbnail, in pixels.
const THUMBNAIL_SIZE: u32 = 160;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("lightbox-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, message: impl Into<String>) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: message.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadGallery { dir } => handle_load_gallery(&dir, &tx, &ctx),
            WorkerCommand::LoadPreview { ticket, path } => {
                handle_load_preview(ticket, path, &tx, &ctx)
            }
        }
    }
    debug!("Worker command channel closed");
}

fn handle_load_gallery(dir: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    let sources = match scan_gallery(dir) {
        Ok(sources) => sources,
        Err(e) => {
            send_error(tx, ctx, format!("Cannot open {}: {e}", dir.display()));
            return;
        }
    };

    send(
        tx,
        ctx,
        WorkerResult::Gallery {
            dir: dir.to_path_buf(),
            sources: sources.clone(),
        },
    );

    sources
        .par_iter()
        .enumerate()
        .for_each(|(index, source)| match load_thumbnail(source) {
            Ok(image) => send(
                tx,
                ctx,
                WorkerResult::Thumbnail {
                    dir: dir.to_path_buf(),
                    index,
                    image,
                },
            ),
            Err(e) => send_error(tx, ctx, format!("Thumbnail failed for {source}: {e}")),
        });

    info!(
        dir = %dir.display(),
        count = sources.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Gallery loaded"
    );
}

/// Decode the tile image (the thumbnail file when there is one) and shrink it.
fn load_thumbnail(source: &ImageSource) -> lightbox_core::error::Result<egui::ColorImage> {
    let path = source.fallback.as_deref().unwrap_or(&source.primary);
    let rgba = load_rgba(path)?;
    let natural = Size::new(rgba.width(), rgba.height());
    let fitted = compute_base_fit(natural, Size::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE))?;
    if fitted == natural {
        return Ok(rgba_to_color_image(&rgba));
    }
    let small = imageops::thumbnail(&rgba, fitted.width, fitted.height);
    Ok(rgba_to_color_image(&small))
}

fn handle_load_preview(
    ticket: LoadTicket,
    path: PathBuf,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_rgba(&path) {
        Ok(rgba) => {
            let natural = Size::new(rgba.width(), rgba.height());
            debug!(path = %path.display(), %natural, "Preview image decoded");
            send(
                tx,
                ctx,
                WorkerResult::PreviewLoaded {
                    ticket,
                    path,
                    natural,
                    image: rgba_to_color_image(&rgba),
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::PreviewFailed {
                ticket,
                path,
                message: e.to_string(),
            },
        ),
    }
}
