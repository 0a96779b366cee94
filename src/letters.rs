//! Letter multisets and letter sets over the lowercase ASCII alphabet.
//!
//! A roll and every dictionary word are reduced to a fixed-size count array,
//! so containment and subtraction are 26 comparisons with no allocation.

use std::fmt;

/// Number of letters in the supported alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its slot, or `None` for anything else.
#[inline(always)]
fn letter_slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter - b'a') as usize)
}

/// A bag of letters: how many of each letter `a..=z` are available.
///
/// Counts never go negative. Subtraction that would underflow is rejected
/// by [`LetterMultiset::checked_sub`] instead of mutating anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMultiset {
    counts: [u8; ALPHABET_SIZE],
    total: u16,
}

impl LetterMultiset {
    /// The empty multiset.
    pub const EMPTY: Self = Self {
        counts: [0; ALPHABET_SIZE],
        total: 0,
    };

    /// Builds the multiset of the lowercase letters in `word`.
    ///
    /// Characters outside `a..=z` are ignored; callers normalize first.
    pub fn from_word(word: &str) -> Self {
        let mut multiset = Self::EMPTY;
        for slot in word.bytes().filter_map(letter_slot) {
            multiset.counts[slot] += 1;
            multiset.total += 1;
        }
        multiset
    }

    /// Count for a single letter. Non-letters always count zero.
    #[inline]
    pub fn count(&self, letter: char) -> u8 {
        u8::try_from(letter)
            .ok()
            .and_then(letter_slot)
            .map_or(0, |slot| self.counts[slot])
    }

    /// Total number of letters, counting repeats.
    #[inline]
    pub fn len(&self) -> usize {
        self.total as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns true if every letter of `other` is available here at least
    /// as many times as `other` needs it.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(&supply, &demand)| supply >= demand)
    }

    /// Removes `other` from this multiset, or returns `None` if any letter
    /// would go negative.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if !self.contains(other) {
            return None;
        }
        let mut remaining = *self;
        for (count, &used) in remaining.counts.iter_mut().zip(other.counts.iter()) {
            *count -= used;
        }
        remaining.total -= other.total;
        Some(remaining)
    }

    /// Sum of two multisets.
    pub fn union_sum(&self, other: &Self) -> Self {
        let mut combined = *self;
        for (count, &extra) in combined.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
        combined.total += other.total;
        combined
    }

    /// Number of letters of `self` that `usage` accounts for, capping each
    /// letter at the count available here.
    pub fn covered_by(&self, usage: &Self) -> usize {
        self.counts
            .iter()
            .zip(usage.counts.iter())
            .map(|(&supply, &used)| supply.min(used) as usize)
            .sum()
    }

    /// The set of distinct letters present.
    pub fn letter_set(&self) -> LetterSet {
        let mut bits = 0u32;
        for (slot, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                bits |= 1 << slot;
            }
        }
        LetterSet(bits)
    }

    /// Iterates letters in alphabetical order, repeating each by its count.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.iter().enumerate().flat_map(|(slot, &count)| {
            std::iter::repeat(char::from(b'a' + slot as u8)).take(count as usize)
        })
    }
}

impl fmt::Debug for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LetterMultiset({})", self)
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// The distinct letters of a word, one bit per letter (bit 0 = `a`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct LetterSet(u32);

impl LetterSet {
    #[inline(always)]
    pub fn intersects(&self, other: &Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
