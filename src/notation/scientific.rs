use crate::error::{PitchError, Result};
use crate::notation::scan::{split_accidentals, tokenize};
use crate::types::{BaseNote, NotationStyle, PitchName};

const STYLE: NotationStyle = NotationStyle::Scientific;

/// Parse scientific pitch notation such as "A4", "Bb3" or "c##0".
///
/// The note letter is case-insensitive and accidentals may appear anywhere
/// in the note run. Exactly one note run and one digit run are required.
pub fn parse(input: &str) -> Result<PitchName> {
    let tokens = tokenize(input, STYLE, |c| c.is_ascii_digit())?;

    if tokens.note_runs != 1 || tokens.octave_runs != 1 {
        return Err(PitchError::MissingNoteOrOctave(STYLE));
    }

    let octave: i32 = tokens
        .octave
        .parse()
        .map_err(|_| PitchError::UnparsableOctave {
            style: STYLE,
            digits: tokens.octave.clone(),
        })?;

    let spelling = split_accidentals(&tokens.note.to_ascii_lowercase(), STYLE)?;
    let base = BaseNote::from_char(spelling.letter).ok_or(PitchError::NoteNotFound(STYLE))?;

    Ok(PitchName::new(base, spelling.accidentals, octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a4() {
        assert_eq!(parse("A4"), Ok(PitchName::new(BaseNote::A, 0, 4)));
        assert_eq!(parse("a4"), Ok(PitchName::new(BaseNote::A, 0, 4)));
    }

    #[test]
    fn test_parse_b_flat_3() {
        let pitch = parse("Bb3").unwrap();
        assert_eq!(pitch, PitchName::new(BaseNote::B, -1, 3));
        assert_eq!(pitch.semitone_offset(), -11);
    }

    #[test]
    fn test_double_b_is_b_flat() {
        assert_eq!(parse("bb4"), Ok(PitchName::new(BaseNote::B, -1, 4)));
        assert_eq!(parse("BB4"), Ok(PitchName::new(BaseNote::B, -1, 4)));
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(parse("C#5"), Ok(PitchName::new(BaseNote::C, 1, 5)));
        assert_eq!(parse("Ebb2"), Ok(PitchName::new(BaseNote::E, -2, 2)));
        assert_eq!(parse("#f0"), Ok(PitchName::new(BaseNote::F, 1, 0)));
    }

    #[test]
    fn test_parse_large_octave() {
        assert_eq!(parse("G012"), Ok(PitchName::new(BaseNote::G, 0, 12)));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            parse("A4.5"),
            Err(PitchError::InvalidCharacter {
                style: STYLE,
                found: '.'
            })
        );
        assert_eq!(
            parse("c'"),
            Err(PitchError::InvalidCharacter {
                style: STYLE,
                found: '\''
            })
        );
    }

    #[test]
    fn test_missing_note_or_octave() {
        for input in ["A", "4", "", "A4B", "4A4"] {
            assert_eq!(
                parse(input),
                Err(PitchError::MissingNoteOrOctave(STYLE)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_unparsable_octave() {
        assert_eq!(
            parse("A99999999999"),
            Err(PitchError::UnparsableOctave {
                style: STYLE,
                digits: "99999999999".to_string()
            })
        );
    }

    #[test]
    fn test_note_not_found() {
        assert_eq!(parse("#4"), Err(PitchError::NoteNotFound(STYLE)));
        assert_eq!(parse("ce4"), Err(PitchError::NoteNotFound(STYLE)));
    }

    #[test]
    fn test_too_many_accidentals() {
        assert_eq!(parse("C###4"), Err(PitchError::TooManyAccidentals(STYLE)));
        assert_eq!(parse("Dbbb4"), Err(PitchError::TooManyAccidentals(STYLE)));
    }

    #[test]
    fn test_mixed_accidentals() {
        assert_eq!(parse("Cb#4"), Err(PitchError::MixedAccidentals(STYLE)));
    }

    #[test]
    fn test_check_order() {
        // A bad character wins over a missing octave
        assert!(matches!(
            parse("X"),
            Err(PitchError::InvalidCharacter { .. })
        ));
        // Too many accidentals is reported before mixing
        assert_eq!(parse("C###b4"), Err(PitchError::TooManyAccidentals(STYLE)));
    }

    #[test]
    fn test_display_normalizes_spelling() {
        assert_eq!(parse("bb4").unwrap().to_string(), "Bb4");
        assert_eq!(parse("#f0").unwrap().to_string(), "F#0");
    }
}
