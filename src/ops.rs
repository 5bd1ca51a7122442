//! Aggregate boolean operations over condition sequences
//!
//! Every operation validates that its input is a [`Condition::Sequence`]
//! before evaluating and fails with an invalid-input error otherwise.

use crate::error::Result;
use crate::evaluator::{short_circuit, truthy_count, truthy_count_capped};
use crate::value::Condition;

/// Returns `true` if every condition in the sequence is truthy
///
/// Scanning stops at the first falsy condition. An empty sequence is `true`.
///
/// # Examples
///
/// ```
/// use logical::Condition;
///
/// assert!(logical::and(&Condition::from(vec![true, true])).unwrap());
/// assert!(!logical::and(&Condition::from(vec![true, false])).unwrap());
/// ```
pub fn and(input: &Condition) -> Result<bool> {
    Ok(short_circuit(input.as_sequence()?, false, true))
}

/// Returns `true` if at least one condition in the sequence is truthy
///
/// Scanning stops at the first truthy condition. An empty sequence is
/// `false`.
pub fn or(input: &Condition) -> Result<bool> {
    Ok(short_circuit(input.as_sequence()?, true, false))
}

/// Returns `true` if no condition in the sequence is truthy
pub fn nor(input: &Condition) -> Result<bool> {
    Ok(short_circuit(input.as_sequence()?, false, false))
}

/// Returns `true` if not all conditions in the sequence are truthy
pub fn nand(input: &Condition) -> Result<bool> {
    Ok(short_circuit(input.as_sequence()?, true, true))
}

/// Returns `true` if the number of truthy conditions is odd
///
/// Sequences of three or fewer conditions are evaluated with the
/// exactly-one rule instead, so `xor` agrees with [`strict_xor`] on short
/// inputs even where parity would differ:
///
/// ```
/// use logical::Condition;
///
/// // three truthy conditions: odd, but not exactly one
/// assert!(!logical::xor(&Condition::from(vec![true, true, true])).unwrap());
/// // four conditions: parity applies
/// assert!(logical::xor(&Condition::from(vec![true, true, true, false])).unwrap());
/// ```
pub fn xor(input: &Condition) -> Result<bool> {
    let conditions = input.as_sequence()?;

    // Short inputs keep the exactly-one rule; parity only applies beyond
    // three conditions.
    if conditions.len() <= 3 {
        return Ok(truthy_count_capped(conditions, 2) == 1);
    }

    Ok(truthy_count(conditions) % 2 == 1)
}

/// Returns `true` if exactly one condition in the sequence is truthy,
/// regardless of sequence length
///
/// Counting stops as soon as a second truthy condition is found.
///
/// # Examples
///
/// ```
/// use logical::Condition;
///
/// assert!(logical::strict_xor(&Condition::from(vec![false, true, false])).unwrap());
/// assert!(!logical::strict_xor(&Condition::from(vec![true, true, false])).unwrap());
/// ```
pub fn strict_xor(input: &Condition) -> Result<bool> {
    Ok(truthy_count_capped(input.as_sequence()?, 2) == 1)
}

/// Returns `true` if all conditions are truthy or none are
///
/// Equivalent to `and(s) || nor(s)`, computed in a single scan. An empty
/// sequence is `true`.
pub fn xnor(input: &Condition) -> Result<bool> {
    let conditions = input.as_sequence()?;
    let truths = truthy_count(conditions);
    Ok(truths == conditions.len() || truths == 0)
}

/// Replaces every condition in the sequence with its boolean negation,
/// in place
///
/// This is the one side-effecting operation in the crate: the caller's
/// sequence is mutated and nothing is returned. Non-boolean conditions are
/// coerced, so the sequence holds only [`Condition::Boolean`] values
/// afterwards.
///
/// # Examples
///
/// ```
/// use logical::Condition;
///
/// let mut conditions = Condition::from(vec![true, false]);
/// logical::not(&mut conditions).unwrap();
/// assert_eq!(conditions, Condition::from(vec![false, true]));
/// ```
pub fn not(input: &mut Condition) -> Result<()> {
    for condition in input.as_sequence_mut()? {
        *condition = Condition::Boolean(!condition.to_boolean());
    }
    Ok(())
}
