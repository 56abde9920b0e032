use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pitch notation used for both parsing input and spelling output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationStyle {
    /// Letter, accidentals and octave number, e.g. "C#4"
    Scientific,
    /// Letter case plus ticks or commas, e.g. "c'" or "C,"
    Helmholtz,
}

impl Default for NotationStyle {
    fn default() -> Self {
        NotationStyle::Scientific
    }
}

impl NotationStyle {
    /// Human-readable grammar name used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            NotationStyle::Scientific => "scientific pitch notation",
            NotationStyle::Helmholtz => "Helmholtz notation",
        }
    }
}

impl fmt::Display for NotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationStyle::Scientific => write!(f, "scientific"),
            NotationStyle::Helmholtz => write!(f, "helmholtz"),
        }
    }
}

impl FromStr for NotationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scientific" => Ok(NotationStyle::Scientific),
            "helmholtz" => Ok(NotationStyle::Helmholtz),
            other => Err(format!("unknown notation style: {}", other)),
        }
    }
}
