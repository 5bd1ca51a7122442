//! Evaluation engine: short-circuit scanning and truth counting

use crate::value::Condition;

/// Scan left to right and return `result_on_match` at the first matching
/// condition, or its opposite when the scan completes without a match.
///
/// `match_on_falsy` selects what counts as a match: a condition coercing to
/// false (`true`) or to true (`false`). Four operations share this engine:
///
/// | operation | `result_on_match` | `match_on_falsy` |
/// |-----------|-------------------|------------------|
/// | `and`     | `false`           | `true`           |
/// | `or`      | `true`            | `false`          |
/// | `nor`     | `false`           | `false`          |
/// | `nand`    | `true`            | `true`           |
///
/// Runs in O(k) where k is the index of the first decisive condition.
pub(crate) fn short_circuit(
    conditions: &[Condition],
    result_on_match: bool,
    match_on_falsy: bool,
) -> bool {
    for (index, condition) in conditions.iter().enumerate() {
        let matched = if match_on_falsy {
            !condition.to_boolean()
        } else {
            condition.to_boolean()
        };

        if matched {
            log::trace!("short-circuit at index {index} of {}", conditions.len());
            return result_on_match;
        }
    }

    !result_on_match
}

/// Count the conditions that coerce to true
///
/// Full scan; the parity and all-or-none evaluators need the exact count.
pub(crate) fn truthy_count(conditions: &[Condition]) -> usize {
    conditions.iter().filter(|c| c.to_boolean()).count()
}

/// Count truthy conditions, stopping once `cap` is reached
///
/// The exactly-one evaluator only distinguishes zero, one, and more than
/// one, so it never scans past the second truthy condition.
pub(crate) fn truthy_count_capped(conditions: &[Condition], cap: usize) -> usize {
    let mut count = 0;
    for condition in conditions {
        if condition.to_boolean() {
            count += 1;
            if count >= cap {
                break;
            }
        }
    }
    count
}
