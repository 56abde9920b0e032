//! Two-pass tokenizer shared by the scientific and Helmholtz grammars.
//!
//! The first pass rejects characters outside the grammar's alphabet. The
//! second splits the input into runs of note characters (letters and `#`)
//! and runs of octave characters, concatenating each class.

use crate::error::{PitchError, Result};
use crate::types::{NotationStyle, PitchName};

/// Input split into its note part and octave part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    /// Note letters and accidentals, in input order
    pub note: String,
    /// Number of contiguous note runs
    pub note_runs: usize,
    /// Octave characters (digits, ticks, commas), in input order
    pub octave: String,
    /// Number of contiguous octave runs
    pub octave_runs: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Note,
    Octave,
}

/// Letters A-G in either case, plus `#`
pub fn is_note_char(c: char) -> bool {
    matches!(c, 'a'..='g' | 'A'..='G' | '#')
}

pub fn tokenize(
    input: &str,
    style: NotationStyle,
    is_octave_char: impl Fn(char) -> bool,
) -> Result<Tokens> {
    if let Some(found) = input
        .chars()
        .find(|&c| !is_note_char(c) && !is_octave_char(c))
    {
        return Err(PitchError::InvalidCharacter { style, found });
    }

    let mut tokens = Tokens::default();
    let mut previous = None;
    for c in input.chars() {
        let class = if is_note_char(c) {
            Class::Note
        } else {
            Class::Octave
        };

        if previous != Some(class) {
            match class {
                Class::Note => tokens.note_runs += 1,
                Class::Octave => tokens.octave_runs += 1,
            }
        }
        match class {
            Class::Note => tokens.note.push(c),
            Class::Octave => tokens.octave.push(c),
        }
        previous = Some(class);
    }

    Ok(tokens)
}

/// Base letter and signed accidental count extracted from a note run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSpelling {
    /// The base letter, in the case it was written
    pub letter: char,
    /// Negative for flats, positive for sharps
    pub accidentals: i8,
}

/// Strip `b` and `#` modifiers from a note run and validate what remains.
///
/// Only lowercase `b` counts as a flat. When stripping leaves nothing, one of
/// the stripped `b`s was the note B itself.
pub fn split_accidentals(note: &str, style: NotationStyle) -> Result<NoteSpelling> {
    let mut flats = note.chars().filter(|&c| c == 'b').count();
    let sharps = note.chars().filter(|&c| c == '#').count();
    let mut remaining = note.chars().filter(|&c| c != 'b' && c != '#');

    let letter = match (remaining.next(), remaining.next()) {
        (Some(letter), None) => letter,
        (None, _) if flats > 0 => {
            flats -= 1;
            'b'
        }
        _ => return Err(PitchError::NoteNotFound(style)),
    };

    let max = PitchName::MAX_ACCIDENTALS as usize;
    if flats > max || sharps > max {
        return Err(PitchError::TooManyAccidentals(style));
    }
    if flats > 0 && sharps > 0 {
        return Err(PitchError::MixedAccidentals(style));
    }

    // Both counts are at most MAX_ACCIDENTALS here
    let accidentals = sharps as i8 - flats as i8;
    Ok(NoteSpelling {
        letter,
        accidentals,
    })
}
