//! Run configuration for a single invocation

use std::path::{Path, PathBuf};

use super::SayError;

/// Wrap width used when none is given
pub const DEFAULT_WIDTH: usize = 40;

/// Smallest accepted wrap width
pub const MIN_WIDTH: usize = 10;

/// Largest accepted wrap width
pub const MAX_WIDTH: usize = 200;

/// Art file printed under the bubble when none is given
pub const DEFAULT_ART_FILE: &str = "/usr/share/femboysay/femboy.txt";

/// Validated, immutable settings for one run of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayConfig {
    width: usize,
    art_path: PathBuf,
}

impl SayConfig {
    /// Build a config, rejecting widths outside `MIN_WIDTH..=MAX_WIDTH`
    ///
    /// The width is taken as a signed value so that negative input from the
    /// command line is reported as out of range rather than as a parse error.
    pub fn new(width: i64, art_path: impl Into<PathBuf>) -> Result<Self, SayError> {
        let width = usize::try_from(width)
            .ok()
            .filter(|w| (MIN_WIDTH..=MAX_WIDTH).contains(w))
            .ok_or_else(|| SayError::invalid_width(width))?;

        Ok(Self {
            width,
            art_path: art_path.into(),
        })
    }

    /// Build a config with the default art file
    pub fn with_width(width: i64) -> Result<Self, SayError> {
        Self::new(width, DEFAULT_ART_FILE)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn art_path(&self) -> &Path {
        &self.art_path
    }
}

impl Default for SayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            art_path: PathBuf::from(DEFAULT_ART_FILE),
        }
    }
}
