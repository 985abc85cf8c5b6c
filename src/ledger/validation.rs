//! Named validation predicates for draft submissions.
//!
//! The rules mirror the tracker's historical behavior: presence checks only,
//! with the documented quirk that an amount of exactly zero is rejected the
//! same way a missing amount is. Anything else — negative values, untrimmed
//! descriptions, oversized numbers — passes through untouched.

/// Returns true when the draft contains at least one non-whitespace character.
pub fn is_non_empty_text(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Parses a raw amount draft, rejecting unparsable input, NaN, and exact zero.
///
/// Zero is treated as "no amount entered"; whether that is product intent or
/// an inherited accident is an open question, but it is the observed contract.
pub fn parse_non_zero_amount(draft: &str) -> Option<f64> {
    let value: f64 = draft.trim().parse().ok()?;
    if value == 0.0 || value.is_nan() {
        None
    } else {
        Some(value)
    }
}
