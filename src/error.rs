use thiserror::Error;

use crate::types::NotationStyle;

/// Input validation failures. The first failing check is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    #[error("bad character in {}: {found:?}", .style.label())]
    InvalidCharacter { style: NotationStyle, found: char },

    #[error("bad format for {}: can't find note and octave", .0.label())]
    MissingNoteOrOctave(NotationStyle),

    #[error("bad format for {}: can't parse octave number {digits:?}", .style.label())]
    UnparsableOctave { style: NotationStyle, digits: String },

    #[error("bad format for {}: no note found", .0.label())]
    NoteNotFound(NotationStyle),

    #[error("bad format for {}: too many # or b", .0.label())]
    TooManyAccidentals(NotationStyle),

    #[error("bad format for {}: mixing # and b", .0.label())]
    MixedAccidentals(NotationStyle),

    #[error("bad format for Helmholtz notation: mixing {0}")]
    MixedOctaveMarkers(&'static str),

    #[error("bad format for Helmholtz notation: mixing {0}")]
    MixedCaseAndMarker(&'static str),

    #[error("{0} NOT IMPLEMENTED")]
    UnimplementedFeature(&'static str),

    #[error("tuning must be a positive frequency in Hz, got {0}")]
    InvalidTuning(f64),
}

pub type Result<T> = std::result::Result<T, PitchError>;
