//! Search configuration
//!
//! Tunables shared by every run. Loaded from JSON or built in code.

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of entries beam search keeps per round
pub const DEFAULT_BEAM_WIDTH: usize = 2;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Beam width (entries kept between beam rounds)
    pub beam_width: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
        }
    }
}

impl SearchConfig {
    /// Override the beam width
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    /// Reject settings no search can run with
    pub fn validate(&self) -> SearchResult<()> {
        if self.beam_width == 0 {
            return Err(SearchError::InvalidConfig(
                "beam_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SearchResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> SearchResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
