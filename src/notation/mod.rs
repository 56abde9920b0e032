pub mod classify;
pub mod helmholtz;
pub mod scan;
pub mod scientific;

pub use classify::{classify, InputKind};

use crate::error::Result;
use crate::types::{NotationStyle, PitchName};

/// Parse a note name with the grammar of the given style
pub fn parse(input: &str, style: NotationStyle) -> Result<PitchName> {
    match style {
        NotationStyle::Scientific => scientific::parse(input),
        NotationStyle::Helmholtz => helmholtz::parse(input),
    }
}
