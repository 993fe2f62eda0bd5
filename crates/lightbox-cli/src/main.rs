mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightbox", about = "Gallery image preview sizing tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the preview size of one image for a window
    Fit(commands::fit::FitArgs),
    /// Show dimensions and preview fit of image files or gallery folders
    Info(commands::info::InfoArgs),
    /// Print or save the default configuration as TOML
    Config(commands::config::ConfigArgs),
    /// Show how a gallery video is laid out in a window
    Video(commands::video::VideoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Video(args) => commands::video::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_core::geometry::Size;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fit_with_natural_size() {
        let cli = Cli::try_parse_from([
            "lightbox", "fit", "--natural", "4000x3000", "--window", "1920x1080", "--zoom", "2",
        ])
        .unwrap();
        let Commands::Fit(args) = cli.command else {
            panic!("expected fit command");
        };
        assert_eq!(args.natural.unwrap().width, 4000);
        assert_eq!(args.window.height, 1080);
        assert_eq!(args.zoom, 2.0);
    }

    #[test]
    fn test_fit_requires_image_or_natural() {
        assert!(Cli::try_parse_from(["lightbox", "fit", "--window", "800x600"]).is_err());
        assert!(Cli::try_parse_from([
            "lightbox", "fit", "--image", "a.png", "--natural", "1x1", "--window", "800x600",
        ])
        .is_err());
    }

    #[test]
    fn test_bad_size_is_rejected() {
        assert!(Cli::try_parse_from([
            "lightbox", "fit", "--natural", "wide", "--window", "800x600",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_video() {
        let cli = Cli::try_parse_from([
            "lightbox", "video", "--size", "1080x1920", "--window", "1280x900",
        ])
        .unwrap();
        let Commands::Video(args) = cli.command else {
            panic!("expected video command");
        };
        assert_eq!(args.size, Size::new(1080, 1920));
        assert_eq!(args.window.height, 900);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["lightbox", "config", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
