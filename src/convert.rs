use std::fmt;

use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::{PitchError, Result};
use crate::notation::{self, InputKind};
use crate::theory::{self, note_math};
use crate::types::NotationStyle;

/// A note reported for a frequency input
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyNote {
    pub name: String,
    pub frequency: f64,
}

/// Result of converting one input string
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// A note name was given; this is its frequency in Hz
    Frequency(f64),
    /// A frequency was given; these are the closest notes, primary first
    NearbyNotes(Vec<NearbyNote>),
}

impl Conversion {
    /// Output lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        match self {
            Conversion::Frequency(frequency) => vec![format!("Frequency: {:.3}", frequency)],
            Conversion::NearbyNotes(notes) => {
                let mut lines = Vec::with_capacity(notes.len() + 1);
                lines.push("Nearby notes:".to_string());
                lines.extend(
                    notes
                        .iter()
                        .map(|note| format!("{} (frequency: {:.3})", note.name, note.frequency)),
                );
                lines
            }
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Converts between frequencies and note names for one tuning and notation
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    tuning: f64,
    style: NotationStyle,
}

impl Converter {
    /// Build a converter from an already validated configuration
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            tuning: config.tuning,
            style: config.notation,
        }
    }

    /// Convert a frequency to its nearby notes, or a note name to its
    /// frequency, depending on what the input looks like
    pub fn convert(&self, input: &str) -> Result<Conversion> {
        match notation::classify(input) {
            InputKind::Frequency(frequency) => {
                debug!("{:?} classified as frequency {}", input, frequency);
                Ok(self.frequency_to_notes(frequency))
            }
            InputKind::PitchName => {
                debug!("{:?} classified as {} note name", input, self.style);
                self.pitch_to_frequency(input)
            }
        }
    }

    /// Parse a note name and compute its frequency.
    ///
    /// An octave so far out that the frequency overflows to infinity or
    /// underflows to zero is rejected as an unusable octave number.
    pub fn pitch_to_frequency(&self, input: &str) -> Result<Conversion> {
        let pitch = notation::parse(input, self.style)?;
        let frequency = pitch.frequency(self.tuning);
        debug!(%pitch, offset = pitch.semitone_offset(), frequency, "parsed note name");

        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(PitchError::UnparsableOctave {
                style: self.style,
                digits: pitch.octave.to_string(),
            });
        }
        Ok(Conversion::Frequency(frequency))
    }

    /// Spell the notes nearest to a positive frequency
    pub fn frequency_to_notes(&self, frequency: f64) -> Conversion {
        let notes = theory::resolve(frequency, self.tuning)
            .into_iter()
            .map(|candidate| NearbyNote {
                name: note_math::spell(candidate.offset, self.style),
                frequency: candidate.frequency,
            })
            .collect();
        Conversion::NearbyNotes(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter(tuning: f64, notation: NotationStyle) -> Converter {
        Converter::new(&ConverterConfig { tuning, notation })
    }

    fn scientific() -> Converter {
        converter(440.0, NotationStyle::Scientific)
    }

    fn helmholtz() -> Converter {
        converter(440.0, NotationStyle::Helmholtz)
    }

    #[test]
    fn test_440_is_exactly_a4() {
        let output = scientific().convert("440").unwrap();
        assert_eq!(
            output.lines(),
            vec!["Nearby notes:", "A4 (frequency: 440.000)"]
        );
    }

    #[test]
    fn test_a4_to_frequency() {
        let output = scientific().convert("A4").unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 440.000"]);
    }

    #[test]
    fn test_b_flat_3_to_frequency() {
        let output = scientific().convert("Bb3").unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 233.082"]);
    }

    #[test]
    fn test_helmholtz_middle_c() {
        let output = helmholtz().convert("c'").unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 261.626"]);
    }

    #[test]
    fn test_450_reports_two_notes() {
        let output = scientific().convert("450").unwrap();
        assert_eq!(
            output.lines(),
            vec![
                "Nearby notes:",
                "A4 (frequency: 440.000)",
                "A#4 (frequency: 466.164)",
            ]
        );
    }

    #[test]
    fn test_double_b_is_not_an_error() {
        let output = scientific().convert("bb4").unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 466.164"]);
    }

    #[test]
    fn test_helmholtz_output_spelling() {
        let output = helmholtz().convert("261.626").unwrap();
        assert_eq!(
            output.lines(),
            vec!["Nearby notes:", "c' (frequency: 261.626)"]
        );

        let output = helmholtz().convert("32.703").unwrap();
        assert_eq!(output.lines()[1], "C, (frequency: 32.703)");
    }

    #[test]
    fn test_custom_tuning() {
        let output = converter(432.0, NotationStyle::Scientific)
            .convert("A4")
            .unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 432.000"]);

        let output = converter(415.0, NotationStyle::Scientific)
            .convert("A5")
            .unwrap();
        assert_eq!(output.lines(), vec!["Frequency: 830.000"]);
    }

    #[test]
    fn test_overflowing_octave_is_rejected() {
        assert_eq!(
            scientific().convert("A2147483647"),
            Err(PitchError::UnparsableOctave {
                style: NotationStyle::Scientific,
                digits: "2147483647".to_string()
            })
        );
    }

    #[test]
    fn test_underflowing_octave_is_rejected() {
        assert_eq!(
            helmholtz().convert("C999999999"),
            Err(PitchError::UnparsableOctave {
                style: NotationStyle::Helmholtz,
                digits: "-999999997".to_string()
            })
        );
    }

    #[test]
    fn test_smallest_positive_frequency_is_spelled() {
        let output = scientific().convert("5e-324").unwrap();
        assert_eq!(output.lines()[1], "C-1078 (frequency: 0.000)");

        let output = helmholtz().convert("5e-324").unwrap();
        assert_eq!(
            output.lines()[1],
            format!("C{} (frequency: 0.000)", ",".repeat(1080))
        );
    }

    #[test]
    fn test_zero_falls_back_to_note_parsing() {
        assert_eq!(
            scientific().convert("0"),
            Err(PitchError::MissingNoteOrOctave(NotationStyle::Scientific))
        );
    }

    #[test]
    fn test_nan_falls_back_to_note_parsing() {
        assert_eq!(
            scientific().convert("nan"),
            Err(PitchError::InvalidCharacter {
                style: NotationStyle::Scientific,
                found: 'n'
            })
        );
    }

    #[test]
    fn test_display_ends_each_line() {
        let output = scientific().convert("A4").unwrap();
        assert_eq!(output.to_string(), "Frequency: 440.000\n");
    }
}
