use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lightbox_core::fit::compute_base_fit;
use lightbox_core::geometry::Size;
use lightbox_core::io::image_io::{probe_dimensions, scan_gallery};
use rayon::prelude::*;

use crate::commands::load_config;

#[derive(Args)]
pub struct InfoArgs {
    /// Image files or gallery folders
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Window size used for the fitted preview column
    #[arg(long, default_value = "1920x1080")]
    pub window: Size,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let bounds = config.chrome.fit_bounds(args.window)?;

    let mut files = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            let gallery = scan_gallery(path)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            files.extend(gallery.into_iter().map(|source| source.primary));
        } else {
            files.push(path.clone());
        }
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Probing images");

    let probed: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = probe_dimensions(path);
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    println!(
        "{:<40}  {:>11}  {:>9}  {:>11}",
        "File", "Natural", "Shape", "Fitted"
    );
    println!("{}", "-".repeat(77));

    let mut failed = 0usize;
    for (path, result) in &probed {
        let name = path.display().to_string();
        match result {
            Ok(natural) => {
                let fitted = compute_base_fit(*natural, bounds)?;
                println!(
                    "{:<40}  {:>11}  {:>9}  {:>11}",
                    name,
                    natural.to_string(),
                    orientation(*natural),
                    fitted.to_string()
                );
            }
            Err(e) => {
                failed += 1;
                println!("{:<40}  error: {}", name, e);
            }
        }
    }

    println!(
        "\n{} image(s), {} unreadable, fitted into {} for a {} window",
        probed.len(),
        failed,
        bounds,
        args.window
    );
    Ok(())
}

fn orientation(size: Size) -> &'static str {
    if size.is_portrait() {
        "portrait"
    } else if size.width == size.height {
        "square"
    } else {
        "landscape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_labels() {
        assert_eq!(orientation(Size::new(1080, 1920)), "portrait");
        assert_eq!(orientation(Size::new(1920, 1080)), "landscape");
        assert_eq!(orientation(Size::new(512, 512)), "square");
    }
}
