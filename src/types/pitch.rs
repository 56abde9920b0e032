use std::fmt;

use crate::theory::note_math;

/// Natural note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseNote {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl BaseNote {
    #[cfg(test)]
    pub const ALL: [BaseNote; 7] = [
        BaseNote::A,
        BaseNote::B,
        BaseNote::C,
        BaseNote::D,
        BaseNote::E,
        BaseNote::F,
        BaseNote::G,
    ];

    /// Case-insensitive letter lookup
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(BaseNote::A),
            'b' => Some(BaseNote::B),
            'c' => Some(BaseNote::C),
            'd' => Some(BaseNote::D),
            'e' => Some(BaseNote::E),
            'f' => Some(BaseNote::F),
            'g' => Some(BaseNote::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            BaseNote::A => 'a',
            BaseNote::B => 'b',
            BaseNote::C => 'c',
            BaseNote::D => 'd',
            BaseNote::E => 'e',
            BaseNote::F => 'f',
            BaseNote::G => 'g',
        }
    }
}

/// A parsed note name: letter, accidentals and octave.
///
/// `accidentals` is negative for flats and positive for sharps, so a single
/// value can never hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchName {
    pub base: BaseNote,
    pub accidentals: i8,
    pub octave: i32,
}

impl PitchName {
    /// Largest number of flats or sharps a pitch can carry
    pub const MAX_ACCIDENTALS: u32 = 2;

    pub fn new(base: BaseNote, accidentals: i8, octave: i32) -> Self {
        debug_assert!(u32::from(accidentals.unsigned_abs()) <= Self::MAX_ACCIDENTALS);
        Self {
            base,
            accidentals,
            octave,
        }
    }

    pub fn flats(&self) -> u32 {
        if self.accidentals < 0 {
            u32::from(self.accidentals.unsigned_abs())
        } else {
            0
        }
    }

    pub fn sharps(&self) -> u32 {
        if self.accidentals > 0 {
            u32::from(self.accidentals.unsigned_abs())
        } else {
            0
        }
    }

    /// Signed half-steps from A4
    pub fn semitone_offset(&self) -> i64 {
        note_math::semitone_offset(self.base, self.octave, self.flats(), self.sharps())
    }

    /// Frequency in Hz under the given A4 reference
    pub fn frequency(&self, tuning: f64) -> f64 {
        note_math::frequency(self.semitone_offset(), tuning)
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = if self.accidentals < 0 { "b" } else { "#" };
        write!(
            f,
            "{}{}{}",
            self.base.as_char().to_ascii_uppercase(),
            accidental.repeat(self.accidentals.unsigned_abs() as usize),
            self.octave
        )
    }
}
