use crate::error::{PitchError, Result};
use crate::notation::scan::{split_accidentals, tokenize};
use crate::types::{BaseNote, NotationStyle, PitchName};

const STYLE: NotationStyle = NotationStyle::Helmholtz;

/// Octave of an unmarked lowercase letter ("c" is C3)
const LOWER_OCTAVE: i64 = 3;
/// Octave of an unmarked uppercase letter ("C" is C2)
const UPPER_OCTAVE: i64 = 2;

fn is_octave_char(c: char) -> bool {
    matches!(c, '1'..='9' | '\'' | ',')
}

/// Parse Helmholtz notation such as "c'", "C,", "bb'" or "c1".
///
/// Letter case selects the register: lowercase counts up from octave 3 with
/// ticks, uppercase counts down from octave 2 with commas. A digit run may
/// stand in for either kind of marker. Only a lowercase `b` is a flat.
pub fn parse(input: &str) -> Result<PitchName> {
    let tokens = tokenize(input, STYLE, is_octave_char)?;

    if tokens.note_runs != 1 || tokens.octave_runs < 1 {
        return Err(PitchError::MissingNoteOrOctave(STYLE));
    }

    let ticks = tokens.octave.chars().filter(|&c| c == '\'').count();
    let commas = tokens.octave.chars().filter(|&c| c == ',').count();
    let digits: String = tokens
        .octave
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if ticks > 0 && commas > 0 {
        return Err(PitchError::MixedOctaveMarkers("ticks and commas"));
    }
    if (ticks > 0 || commas > 0) && !digits.is_empty() {
        return Err(PitchError::MixedOctaveMarkers("ticks or commas with numbers"));
    }

    let unparsable = || PitchError::UnparsableOctave {
        style: STYLE,
        digits: digits.clone(),
    };
    let number: i64 = if digits.is_empty() {
        0
    } else {
        digits.parse::<i32>().map_err(|_| unparsable())?.into()
    };

    let spelling = split_accidentals(&tokens.note, STYLE)?;

    let octave = if spelling.letter.is_ascii_lowercase() {
        if commas > 0 {
            return Err(PitchError::MixedCaseAndMarker("lower-case note and commas"));
        }
        let raise = if ticks > 0 { ticks as i64 } else { number };
        LOWER_OCTAVE + raise
    } else {
        if ticks > 0 {
            return Err(PitchError::MixedCaseAndMarker("upper-case note and ticks"));
        }
        let lower = if commas > 0 { commas as i64 } else { number };
        UPPER_OCTAVE - lower
    };
    let octave = i32::try_from(octave).map_err(|_| unparsable())?;

    let base = BaseNote::from_char(spelling.letter).ok_or(PitchError::NoteNotFound(STYLE))?;
    Ok(PitchName::new(base, spelling.accidentals, octave))
}
