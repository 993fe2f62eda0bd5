use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lightbox_core::geometry::Size;
use lightbox_core::video::VideoPresentation;

use crate::commands::load_config;

#[derive(Args)]
pub struct VideoArgs {
    /// Natural video size from its metadata (e.g. 1080x1920)
    #[arg(long)]
    pub size: Size,

    /// Window size the gallery is shown in
    #[arg(long, default_value = "1920x1080")]
    pub window: Size,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Report how a gallery video card is laid out in a window.
pub fn run(args: &VideoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let presentation = config.video.classify(args.size, args.window.height);
    let rendered = presentation.render_size(args.size);

    println!("Video:        {}", args.size);
    println!("Window:       {}", args.window);
    println!("Presentation: {}", describe(presentation));
    println!("Rendered:     {}", rendered);
    Ok(())
}

fn describe(presentation: VideoPresentation) -> String {
    match presentation {
        VideoPresentation::Standard => "standard".to_string(),
        VideoPresentation::Vertical { max_height } => {
            format!("vertical (max height {max_height})")
        }
    }
}
