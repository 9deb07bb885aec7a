//! Comparisons between possibly absent bit vectors.
//!
//! `less_than`, `greater_than` and `compare` order vectors by numeric value, so padding words and
//! differing lengths don't matter. `equals` is stricter and looks at the length first.
//!
//! An absent vector (`None`) counts as zero on either side of `less_than` / `greater_than`, except
//! that it is never the larger operand:
//!
//! | a         | b         | `less_than(a, b)` | `greater_than(a, b)` |
//! |-----------|-----------|-------------------|----------------------|
//! | `None`    | `None`    | false             | false                |
//! | `None`    | `Some(b)` | `!b.is_clear()`   | false                |
//! | `Some(a)` | `None`    | false             | `!a.is_clear()`      |
//! | `Some(a)` | `Some(b)` | `a < b` by value  | `a > b` by value     |

use std::cmp::Ordering;

use crate::Bits;

fn word_at(bits: &Bits, index: usize) -> u64 {
    bits.words().get(index).copied().unwrap_or(0)
}

fn compare_values(a: &Bits, b: &Bits) -> Ordering {
    let words = a.words().len().max(b.words().len());
    for i in (0..words).rev() {
        match word_at(a, i).cmp(&word_at(b, i)) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

pub fn less_than(a: Option<&Bits>, b: Option<&Bits>) -> bool {
    match (a, b) {
        (_, None) => false,
        (None, Some(b)) => !b.is_clear(),
        (Some(a), Some(b)) => compare_values(a, b).is_lt(),
    }
}

pub fn greater_than(a: Option<&Bits>, b: Option<&Bits>) -> bool {
    match (a, b) {
        (None, _) => false,
        (Some(a), None) => !a.is_clear(),
        (Some(a), Some(b)) => compare_values(a, b).is_gt(),
    }
}

/// Value ordering with `None` treated as zero.
pub fn compare(a: Option<&Bits>, b: Option<&Bits>) -> Ordering {
    if less_than(a, b) {
        Ordering::Less
    } else if greater_than(a, b) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Two absent vectors are equal, an absent and a present one never are.
///
/// Present vectors need the same length and the same words from word 1 upwards. Word 0 is not
/// compared, so vectors that only differ in their lowest 64 bits are reported as equal.
pub fn equals(a: Option<&Bits>, b: Option<&Bits>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.words().iter().skip(1).eq(b.words().iter().skip(1))
        }
        _ => false,
    }
}

pub fn not_equals(a: Option<&Bits>, b: Option<&Bits>) -> bool {
    !equals(a, b)
}

/// Word 0 must equal `word` and every higher word must be zero. An absent or empty vector never
/// equals any word.
pub fn equals_word(a: Option<&Bits>, word: u64) -> bool {
    match a {
        Some(a) if !a.is_empty() => {
            let words = a.words();
            words[0] == word && words[1..].iter().all(|&w| w == 0)
        }
        _ => false,
    }
}

/// Not the negation of `equals_word`: an absent or empty vector is neither equal nor unequal to any word.
pub fn not_equals_word(a: Option<&Bits>, word: u64) -> bool {
    match a {
        Some(a) if !a.is_empty() => !equals_word(Some(a), word),
        _ => false,
    }
}

impl PartialEq for Bits {
    fn eq(&self, other: &Self) -> bool {
        equals(Some(self), Some(other))
    }
}

impl Eq for Bits {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Value 5 with a length of exactly one word.
    fn five_in_one_word() -> Bits {
        let mut bits = Bits::from_indices([0, 2]);
        bits.set(63, false);
        bits
    }

    /// Value 5 with a zero second word.
    fn five_in_two_words() -> Bits {
        let mut bits = Bits::from_indices([0, 2]);
        bits.set(64, false);
        bits
    }

    #[test]
    fn test_absent_operands() {
        let b = Bits::from_indices([5]);

        assert!(less_than(None, Some(&b)));
        assert!(!greater_than(None, Some(&b)));
        assert!(greater_than(Some(&b), None));
        assert!(!less_than(Some(&b), None));

        assert!(!less_than(None, None));
        assert!(!greater_than(None, None));
    }

    #[test]
    fn test_absent_against_clear() {
        let mut zero = Bits::new();
        zero.set(70, false);

        assert!(!less_than(None, Some(&zero)));
        assert!(!greater_than(Some(&zero), None));
        assert_eq!(compare(None, Some(&zero)), Ordering::Equal);
        assert_eq!(compare(Some(&zero), None), Ordering::Equal);
    }

    #[test]
    fn test_ordering_ignores_length() {
        let a = five_in_one_word();
        let b = five_in_two_words();
        assert_eq!(a.len(), 64);
        assert_eq!(a.words().len(), 1);
        assert_eq!(b.len(), 65);
        assert_eq!(b.words(), &[5, 0]);

        assert!(!less_than(Some(&a), Some(&b)));
        assert!(!greater_than(Some(&a), Some(&b)));
        assert!(!less_than(Some(&b), Some(&a)));
        assert!(!greater_than(Some(&b), Some(&a)));
        assert_eq!(compare(Some(&a), Some(&b)), Ordering::Equal);
    }

    #[test]
    fn test_equality_requires_same_length() {
        let a = five_in_one_word();
        let b = five_in_two_words();

        // same value, different length
        assert!(!equals(Some(&a), Some(&b)));
        assert!(not_equals(Some(&a), Some(&b)));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_skips_word_zero() {
        let mut a = Bits::from_indices([0]);
        let mut b = Bits::from_indices([1]);
        a.set(10, false);
        b.set(10, false);

        assert!(less_than(Some(&a), Some(&b)));
        assert!(equals(Some(&a), Some(&b)));
        assert!(!not_equals(Some(&a), Some(&b)));
        assert_eq!(a, b);

        // higher words are compared
        a.set(64, true);
        b.set(64, false);
        assert!(!equals(Some(&a), Some(&b)));
        assert!(not_equals(Some(&a), Some(&b)));
    }

    #[test]
    fn test_equality_absent() {
        let a = Bits::new();
        assert!(equals(None, None));
        assert!(!not_equals(None, None));
        assert!(!equals(Some(&a), None));
        assert!(!equals(None, Some(&a)));
        assert!(not_equals(None, Some(&a)));
        assert!(equals(Some(&a), Some(&Bits::new())));
    }

    #[test]
    fn test_ordering_across_word_counts() {
        let small = Bits::from_indices([0, 1, 2, 63]);
        let large = Bits::from_indices([64]);
        let mut padded = Bits::from_indices([3]);
        padded.set(300, false);

        assert!(less_than(Some(&small), Some(&large)));
        assert!(greater_than(Some(&large), Some(&small)));
        assert!(less_than(Some(&padded), Some(&large)));
        assert!(greater_than(Some(&small), Some(&padded)));
        assert_eq!(compare(Some(&large), Some(&padded)), Ordering::Greater);
        assert_eq!(compare(None, Some(&small)), Ordering::Less);
    }

    #[test]
    fn test_equals_word() {
        let five = five_in_two_words();
        assert!(equals_word(Some(&five), 5));
        assert!(!equals_word(Some(&five), 4));
        assert!(!not_equals_word(Some(&five), 5));
        assert!(not_equals_word(Some(&five), 4));

        let high = Bits::from_indices([0, 2, 64]);
        assert!(!equals_word(Some(&high), 5));
        assert!(not_equals_word(Some(&high), 5));

        let mut zero = Bits::new();
        zero.set(3, false);
        assert!(equals_word(Some(&zero), 0));
    }

    #[test]
    fn test_word_comparison_on_absent_or_empty() {
        let empty = Bits::new();
        for word in [0, 1, u64::MAX] {
            assert!(!equals_word(None, word));
            assert!(!equals_word(Some(&empty), word));
            assert!(!not_equals_word(None, word));
            assert!(!not_equals_word(Some(&empty), word));
        }
    }
}
