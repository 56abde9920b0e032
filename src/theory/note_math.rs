//! Equal temperament conversions between note names, semitone offsets
//! from A4, and frequencies.

use crate::types::{BaseNote, NotationStyle};

/// Spellings for offsets 0..12 above A. Output never uses flats.
const SPELLINGS: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Index of C in `SPELLINGS`; octave numbers change here, not at A
const C_INDEX: i64 = 3;

const REFERENCE_OCTAVE: i64 = 4;

/// Half-steps from A to each natural note within octave 4
fn base_offset(base: BaseNote) -> i64 {
    match base {
        BaseNote::A => 0,
        BaseNote::B => 2,
        BaseNote::C => -9,
        BaseNote::D => -7,
        BaseNote::E => -5,
        BaseNote::F => -4,
        BaseNote::G => -2,
    }
}

/// Signed half-steps between the given note and A4
pub fn semitone_offset(base: BaseNote, octave: i32, nflat: u32, nsharp: u32) -> i64 {
    base_offset(base) + 12 * (i64::from(octave) - REFERENCE_OCTAVE) - i64::from(nflat)
        + i64::from(nsharp)
}

/// Frequency in Hz of the note `offset` half-steps from A4
/// Uses equal temperament: f = tuning * 2^(offset/12)
pub fn frequency(offset: i64, tuning: f64) -> f64 {
    tuning * 2.0_f64.powf(offset as f64 / 12.0)
}

/// Continuous (unrounded) semitone offset of a frequency from A4
///
/// Subtracts logarithms instead of dividing so that extreme but positive
/// inputs cannot underflow or overflow to an infinite offset.
pub fn inverse_offset(frequency: f64, tuning: f64) -> f64 {
    12.0 * (frequency.log2() - tuning.log2())
}

/// Canonical sharp spelling and octave number of an integer offset
pub fn note_name(offset: i64) -> (&'static str, i64) {
    let reduced = offset.rem_euclid(12);
    let mut octave = REFERENCE_OCTAVE + offset.div_euclid(12);
    if reduced >= C_INDEX {
        octave += 1;
    }
    (SPELLINGS[reduced as usize], octave)
}

/// Render an integer offset in the requested notation
pub fn spell(offset: i64, style: NotationStyle) -> String {
    let (letter, octave) = note_name(offset);
    match style {
        NotationStyle::Scientific => format!("{}{}", letter, octave),
        NotationStyle::Helmholtz => {
            if octave > 2 {
                let ticks = usize::try_from(octave - 3).unwrap_or(0);
                format!("{}{}", letter.to_lowercase(), "'".repeat(ticks))
            } else {
                let commas = usize::try_from(2 - octave).unwrap_or(0);
                format!("{}{}", letter, ",".repeat(commas))
            }
        }
    }
}
