use std::fmt;

use crate::BitsError;

pub const WORD_BITS: usize = u64::BITS as usize;

/// A growable bit vector, read as an unsigned integer with bit 0 as the least significant bit.
///
/// `words` always holds exactly `ceil(length / 64)` words and every bit at or past `length` is zero.
/// Words above the highest set bit are never trimmed, so two vectors with the same value may have
/// different lengths.
#[derive(Debug, Clone, Default)]
pub struct Bits {
    length: usize,
    words: Vec<u64>,
}

static EMPTY: Bits = Bits::new();

impl Bits {
    fn word_and_offset(bit: usize) -> (usize, u32) {
        (bit / WORD_BITS, (bit % WORD_BITS) as u32)
    }

    pub const fn new() -> Self {
        Self {
            length: 0,
            words: Vec::new(),
        }
    }

    pub fn with_bit_zero(set: bool) -> Self {
        let mut bits = Self::new();
        if set {
            bits.set(0, true);
        }
        bits
    }

    /// Rebuilds a vector from `len()` and `words()`. The word count has to match the length and no bit
    /// may be set at or past the length.
    pub fn from_words(length: usize, words: Vec<u64>) -> Result<Self, BitsError> {
        let malformed = BitsError::Malformed {
            length,
            words: words.len(),
        };
        if words.len() != length.div_ceil(WORD_BITS) {
            return Err(malformed);
        }

        let used = (length % WORD_BITS) as u32;
        if used != 0 && words.last().is_some_and(|&last| last >> used != 0) {
            return Err(malformed);
        }

        Ok(Self { length, words })
    }

    /// Number of meaningful bits. Not the position of the highest set bit, see `highest_bit_set` for that.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Only ever grows, which keeps the bits past `length` zero.
    fn grow_to(&mut self, length: usize) {
        debug_assert!(length >= self.length);

        let words = length.div_ceil(WORD_BITS);
        if words != self.words.len() {
            log::trace!(
                "growing bit vector from {} to {} words ({} bits)",
                self.words.len(),
                words,
                length
            );
            self.words.resize(words, 0);
        }
        self.length = length;
    }

    pub fn get(&self, index: usize) -> bool {
        if index >= self.length {
            return false;
        }

        let (word, offset) = Self::word_and_offset(index);
        (self.words[word] & (1 << offset)) != 0
    }

    /// Grows the vector to `index + 1` bits if needed, even when clearing.
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.length {
            self.grow_to(index + 1);
        }

        let (word, offset) = Self::word_and_offset(index);
        if value {
            self.words[word] |= 1 << offset;
        } else {
            self.words[word] &= !(1 << offset);
        }
    }

    pub fn and(&self, other: &Bits) -> Bits {
        self.combine(other, |a, b| a & b)
    }

    pub fn or(&self, other: &Bits) -> Bits {
        self.combine(other, |a, b| a | b)
    }

    // A word missing from the shorter operand reads as zero.
    fn combine(&self, other: &Bits, op: impl Fn(u64, u64) -> u64) -> Bits {
        let mut result = Bits::new();
        result.grow_to(self.length.max(other.length));

        for (i, word) in result.words.iter_mut().enumerate() {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            *word = op(a, b);
        }
        result
    }

    /// Returns `self * 2` in a vector one bit longer. Only `amount == 1` is supported.
    ///
    /// When the most significant word overflows, the carry is stored at the new length instead of
    /// the new length minus one, which grows the result by a second bit.
    pub fn shift_left(&self, amount: u32) -> Result<Bits, BitsError> {
        if amount != 1 {
            return Err(BitsError::unsupported("shift", amount.into()));
        }

        let mut result = Bits::new();
        result.grow_to(self.length + 1);

        let mut carry = 0;
        for (i, &word) in self.words.iter().enumerate() {
            result.words[i] = (word << 1) | carry;
            carry = word >> (WORD_BITS - 1);
        }

        if carry != 0 {
            let top = result.length;
            result.set(top, true);
        }

        Ok(result)
    }

    /// Returns `self - 1`, keeping the length. Only `amount == 1` is supported.
    pub fn decrement(&self, amount: u64) -> Result<Bits, BitsError> {
        if self.is_clear() {
            log::debug!("rejected decrement of a clear bit vector of length {}", self.length);
            return Err(BitsError::OutOfRange);
        }
        if amount != 1 {
            return Err(BitsError::unsupported("decrement", amount));
        }

        let mut result = self.clone();
        // Zero words borrow from the first non-zero one, which can't overflow since self isn't clear.
        for word in result.words.iter_mut() {
            if *word == 0 {
                *word = u64::MAX;
            } else {
                *word -= 1;
                break;
            }
        }
        Ok(result)
    }

    pub fn highest_bit_set(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .map(|(i, word)| i * WORD_BITS + word.ilog2() as usize)
    }

    pub fn is_clear(&self) -> bool {
        self.highest_bit_set().is_none()
    }

    /// Indices of all set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        indices.into_iter().collect()
    }
}

impl FromIterator<usize> for Bits {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = Bits::new();
        for index in iter {
            bits.set(index, true);
        }
        bits
    }
}

impl fmt::Display for Bits {
    /// Every word in binary without leading zeros, least significant word first. Only meant for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{word:b}")?;
        }
        Ok(())
    }
}

/// Bitwise AND where `None` acts as an empty vector.
pub fn and(a: Option<&Bits>, b: Option<&Bits>) -> Bits {
    match (a, b) {
        (None, None) => Bits::new(),
        (a, b) => a.unwrap_or(&EMPTY).and(b.unwrap_or(&EMPTY)),
    }
}

/// Bitwise OR where `None` acts as an empty vector.
pub fn or(a: Option<&Bits>, b: Option<&Bits>) -> Bits {
    match (a, b) {
        (None, None) => Bits::new(),
        (a, b) => a.unwrap_or(&EMPTY).or(b.unwrap_or(&EMPTY)),
    }
}
