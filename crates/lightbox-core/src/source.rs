use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A gallery tile's image references.
///
/// `primary` is the full-size image shown in the preview; `fallback` is the
/// tile's own thumbnail, used when the full-size image cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub primary: PathBuf,
    pub fallback: Option<PathBuf>,
}

impl ImageSource {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Reference to try for the given attempt, if any remain.
    ///
    /// Attempt 0 is the primary. Attempt 1 is the fallback, skipped when it
    /// is missing or identical to the primary.
    pub fn reference(&self, attempt: u32) -> Option<&Path> {
        match attempt {
            0 => Some(&self.primary),
            1 => self
                .fallback
                .as_deref()
                .filter(|fallback| *fallback != self.primary.as_path()),
            _ => None,
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary.display())
    }
}
