use tracing::debug;

use crate::theory::note_math;

/// Fraction of a semitone step beyond which the other neighbour is also
/// reported
pub const AMBIGUITY_THRESHOLD: f64 = 0.2;

/// An equal-tempered note near the input frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Half-steps from A4
    pub offset: i64,
    /// Exact frequency of that note in Hz
    pub frequency: f64,
}

/// Find the note(s) closest to `frequency` under the given A4 tuning.
///
/// Returns the primary candidate first, followed by the other neighbouring
/// semitone when the input sits more than `AMBIGUITY_THRESHOLD` of the way
/// from the primary towards it. `frequency` and `tuning` must be positive.
pub fn resolve(frequency: f64, tuning: f64) -> Vec<Candidate> {
    let n = note_math::inverse_offset(frequency, tuning);
    let upper_offset = n.ceil();
    let lower_offset = n.floor();

    let upper = Candidate {
        offset: upper_offset as i64,
        frequency: note_math::frequency(upper_offset as i64, tuning),
    };
    let lower = Candidate {
        offset: lower_offset as i64,
        frequency: note_math::frequency(lower_offset as i64, tuning),
    };
    let span = upper.frequency - lower.frequency;

    // Rounds up: the upper neighbour is primary and the ratio measures the
    // distance down from it
    let (primary, secondary, distance) = if upper_offset == n.round() {
        (upper, lower, upper.frequency - frequency)
    } else {
        (lower, upper, frequency - lower.frequency)
    };
    let ratio = if distance != 0.0 && span != 0.0 {
        distance / span
    } else {
        0.0
    };

    debug!(
        offset = n,
        primary = primary.offset,
        secondary = secondary.offset,
        ratio,
        "resolved frequency {}",
        frequency
    );

    if ratio > AMBIGUITY_THRESHOLD {
        vec![primary, secondary]
    } else {
        vec![primary]
    }
}
