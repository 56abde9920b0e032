/// What the input string denotes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// A usable frequency in Hz
    Frequency(f64),
    /// Anything else, to be parsed as a note name
    PitchName,
}

/// Decide whether the input is a frequency or a note name.
///
/// Surrounding whitespace is ignored for the numeric check. Zero, negative,
/// NaN and infinite values cannot carry a pitch and fall through to note
/// parsing, which then reports why the string is not a note either.
pub fn classify(input: &str) -> InputKind {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => InputKind::Frequency(value),
        _ => InputKind::PitchName,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_frequencies() {
        assert_eq!(classify("440"), InputKind::Frequency(440.0));
        assert_eq!(classify("261.63"), InputKind::Frequency(261.63));
        assert_eq!(classify("4.4e2"), InputKind::Frequency(440.0));
        assert_eq!(classify(" 50 "), InputKind::Frequency(50.0));
    }

    #[test]
    fn test_unusable_numbers_are_not_frequencies() {
        for input in ["0", "0.0", "-0", "-440", "nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(classify(input), InputKind::PitchName, "input {:?}", input);
        }
    }

    #[test]
    fn test_note_names_are_not_frequencies() {
        assert_eq!(classify("A4"), InputKind::PitchName);
        assert_eq!(classify("c'"), InputKind::PitchName);
        assert_eq!(classify(""), InputKind::PitchName);
    }
}
