use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use lightbox_core::fit::ViewportFit;
use lightbox_core::geometry::Size;
use lightbox_core::io::image_io::probe_dimensions;
use lightbox_core::zoom::Zoom;
use tracing::warn;

use crate::commands::load_config;
use crate::summary::print_fit_summary;

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["image", "natural"])))]
pub struct FitArgs {
    /// Image file to read the natural size from
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Natural image size (e.g. 4000x3000)
    #[arg(long)]
    pub natural: Option<Size>,

    /// Window size the preview is shown in
    #[arg(long, default_value = "1920x1080")]
    pub window: Size,

    /// Zoom factor applied on top of the fitted size
    #[arg(long, default_value = "1.0")]
    pub zoom: f64,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &FitArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let natural = match (&args.image, args.natural) {
        (Some(path), _) => probe_dimensions(path)
            .with_context(|| format!("Failed to read image size of {}", path.display()))?,
        (None, Some(size)) => size,
        (None, None) => unreachable!("clap requires --image or --natural"),
    };

    let zoom = Zoom::new(args.zoom, config.zoom);
    if zoom.value() != args.zoom {
        warn!(requested = args.zoom, applied = zoom.value(), "Zoom clamped");
    }

    let bounds = config
        .chrome
        .fit_bounds(args.window)
        .with_context(|| format!("Window {} leaves no room for a preview", args.window))?;
    let max_display_width = config.chrome.max_display_width(args.window)?;
    let fit = ViewportFit::compute(natural, bounds, zoom, max_display_width)?;
    let watermark = config.watermark.layout(fit.display);

    print_fit_summary(args.image.as_deref(), args.window, &fit, &watermark);
    Ok(())
}
