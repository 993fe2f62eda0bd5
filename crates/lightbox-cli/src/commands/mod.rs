pub mod config;
pub mod fit;
pub mod info;
pub mod video;

use std::path::Path;

use anyhow::{Context, Result};
use lightbox_core::config::LightboxConfig;

/// Read a TOML config, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<LightboxConfig> {
    let Some(path) = path else {
        return Ok(LightboxConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), LightboxConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lightbox.toml");
        std::fs::write(&path, "[chrome]\ndisplay_max_width = 640\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chrome.display_max_width, 640);
        assert_eq!(config.chrome.fit_max_width, 1000);
    }

    #[test]
    fn test_load_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("missing.toml"), "got: {err}");
    }
}
