//! Aggregate boolean logic over sequences of boolean-coercible values
//!
//! Seven predicates ([`and`], [`or`], [`xor`], [`strict_xor`], [`nor`],
//! [`xnor`], [`nand`]) reduce a [`Condition`] sequence to a single boolean,
//! and [`not`] negates every element in place. Elements are coerced under
//! truthy/falsy rules, so sequences may mix booleans with numbers, strings,
//! or nested values. Any input that is not a sequence fails with
//! [`LogicalError::InvalidInput`] before evaluation begins.
//!
//! ```
//! use logical::Condition;
//!
//! let conditions = Condition::from(vec![true, false, true]);
//! assert!(logical::or(&conditions).unwrap());
//! assert!(!logical::and(&conditions).unwrap());
//! ```

pub mod error;
mod evaluator;
pub mod ops;
pub mod value;

// Re-export main types
pub use error::{LogicalError, Result};
pub use ops::{and, nand, nor, not, or, strict_xor, xnor, xor};
pub use value::Condition;
