//! ## A growable bit vector that doubles as an unsigned big integer.
//!
//! [`Bits`] stores its bits in a `Vec<u64>` sized to exactly cover its logical length. Bits can be read
//! past the end (they are zero) and writing past the end grows the vector.
//!
//! Besides plain bit access it supports the handful of arithmetic operations a combinatorial solver needs
//! to walk subsets in numeric order:
//! - `and` / `or`
//! - `shift_left` by one
//! - `decrement` by one
//! - value comparison via `less_than`, `greater_than` and `compare`
//!
//! ### Absent operands
//! The binary operators and comparisons take `Option<&Bits>`. `None` stands in for "no value yet" and
//! mostly behaves like an all-zero vector of unconstrained length, but the comparisons treat it
//! slightly differently from a present empty vector, see the table on each function in [`cmp`].
//!
//! ### Equality
//! `==` between two vectors is length sensitive and ignores word 0, while `less_than` / `greater_than`
//! only look at the numeric value. Use [`compare`] when you care about values.
//!
//! Comparing against a single word goes through [`equals_word`] and [`not_equals_word`]. Neither holds
//! for an absent or empty vector, which is why `Bits` doesn't implement `PartialEq<u64>`.

mod bits;
pub mod cmp;
#[cfg(feature = "serde")]
mod serde_impl;

pub use bits::{Bits, WORD_BITS, and, or};
pub use cmp::{compare, equals, equals_word, greater_than, less_than, not_equals, not_equals_word};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitsError {
    /// Shift and decrement are only implemented for an amount of exactly one.
    #[error("{operation} by {amount} is not supported, only by 1")]
    Unsupported { operation: &'static str, amount: u64 },
    #[error("cannot decrement a clear bit vector, the result would be negative")]
    OutOfRange,
    /// Raw words that don't fit the declared length, see `Bits::from_words`.
    #[error("{words} words do not match a bit length of {length}")]
    Malformed { length: usize, words: usize },
}

impl BitsError {
    pub(crate) fn unsupported(operation: &'static str, amount: u64) -> Self {
        let err = BitsError::Unsupported { operation, amount };
        log::debug!("rejected bit vector operation: {err}");
        err
    }
}
