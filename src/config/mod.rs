use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PitchError;
use crate::types::NotationStyle;

/// Settings for one conversion run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConverterConfig {
    /// Frequency of A4 in Hz
    #[serde(default = "default_tuning")]
    pub tuning: f64,

    /// Notation used to parse note names and spell results
    #[serde(default)]
    pub notation: NotationStyle,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            tuning: default_tuning(),
            notation: NotationStyle::default(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ConverterConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of file or default settings
    pub fn with_overrides(mut self, tuning: Option<f64>, notation: Option<NotationStyle>) -> Self {
        if let Some(tuning) = tuning {
            self.tuning = tuning;
        }
        if let Some(notation) = notation {
            self.notation = notation;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), PitchError> {
        if !self.tuning.is_finite() || self.tuning <= 0.0 {
            return Err(PitchError::InvalidTuning(self.tuning));
        }
        Ok(())
    }
}

fn default_tuning() -> f64 {
    440.0
}
