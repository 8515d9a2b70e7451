//! Heap-backed immutable bitset with normalized word storage.
//!
//! A [`BitSet`] never stores a trailing zero word, so two sets with the same
//! members always hold identical word arrays and the derived `Eq`/`Hash` are
//! set equality. Values are immutable: algebra and the single-element
//! [`with`](BitSet::with)/[`without`](BitSet::without) updates return new sets.
//! To add many members one at a time, use a [`BitSetBuilder`] and publish the
//! result with [`BitSetBuilder::build`].
//!
//! # Examples
//! ```
//! use wordset::{BitSet, WordSet};
//!
//! let a: BitSet = "{1, 3, 64, 65}".parse().unwrap();
//! let b = BitSet::new().with(1).with(2).with(64);
//!
//! assert_eq!((&a | &b).to_string(), "{1, 2, 3, 64, 65}");
//! assert_eq!((&a - &b).to_string(), "{3, 65}");
//! assert_eq!(a.count(), 4);
//! ```

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Sub};
use core::str::FromStr;

use crate::error::ParseBitSetError;
use crate::word_set::{Members, WordSet};
use crate::words::{
    bit_mask, is_normalized, trim_trailing_zeros, update_word_in_place, updated_words, word_index,
    words_for_bits,
};

/// Immutable set of non-negative integers backed by a normalized `u64` array.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<u64>", into = "Vec<u64>")
)]
pub struct BitSet {
    words: Box<[u64]>,
}

impl BitSet {
    /// Largest member [`FromStr`] accepts.
    ///
    /// A set holding it needs 512 MiB of words; larger text input is rejected
    /// with [`ParseBitSetError::ElementTooLarge`] instead of being allocated.
    pub const MAX_PARSED_MEMBER: usize = u32::MAX as usize;

    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for accumulating members one at a time.
    #[inline]
    pub fn builder() -> BitSetBuilder {
        BitSetBuilder::new()
    }

    /// Returns a builder seeded with this set's members.
    pub fn to_builder(&self) -> BitSetBuilder {
        BitSetBuilder {
            words: self.words.to_vec(),
        }
    }

    /// The normalized word storage.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns this set with `x` added.
    pub fn with(&self, x: usize) -> Self {
        let idx = word_index(x);
        let word = self.word(idx);
        let updated = word | bit_mask(x);
        if updated == word {
            return self.clone();
        }
        Self::from_normalized(updated_words(&self.words, idx, updated))
    }

    /// Returns this set with `x` removed.
    pub fn without(&self, x: usize) -> Self {
        let idx = word_index(x);
        let word = self.word(idx);
        let updated = word & !bit_mask(x);
        if updated == word {
            return self.clone();
        }
        Self::from_normalized(updated_words(&self.words, idx, updated))
    }

    #[inline]
    fn from_normalized(words: Vec<u64>) -> Self {
        debug_assert!(is_normalized(&words));
        Self {
            words: words.into_boxed_slice(),
        }
    }
}

impl WordSet for BitSet {
    #[inline]
    fn word_len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn word(&self, idx: usize) -> u64 {
        self.words.get(idx).copied().unwrap_or(0)
    }

    fn from_words(mut words: Vec<u64>) -> Self {
        trim_trailing_zeros(&mut words);
        Self::from_normalized(words)
    }

    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<u64>> for BitSet {
    fn from(words: Vec<u64>) -> Self {
        Self::from_words(words)
    }
}

impl From<&[usize]> for BitSet {
    fn from(members: &[usize]) -> Self {
        members.iter().copied().collect()
    }
}

impl<const K: usize> From<[usize; K]> for BitSet {
    fn from(members: [usize; K]) -> Self {
        members.into_iter().collect()
    }
}

impl From<BitSet> for Vec<u64> {
    fn from(set: BitSet) -> Self {
        set.words.into_vec()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut builder = BitSetBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Members<'a, BitSet>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        self.union(rhs)
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        self.intersection(rhs)
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    fn sub(self, rhs: &BitSet) -> BitSet {
        self.difference(rhs)
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: &BitSet) -> BitSet {
        self.symmetric_difference(rhs)
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_members(f, "{", ", ", "}")
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_members(f, "BitSet {", ", ", "}")
    }
}

impl FromStr for BitSet {
    type Err = ParseBitSetError;

    /// Parses the [`Display`](fmt::Display) form, e.g. `{1, 3, 64}`.
    ///
    /// Whitespace around the braces and elements is ignored; members may
    /// appear in any order and repeat. Members above
    /// [`MAX_PARSED_MEMBER`](Self::MAX_PARSED_MEMBER) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .ok_or(ParseBitSetError::MissingOpenBrace)?
            .strip_suffix('}')
            .ok_or(ParseBitSetError::MissingCloseBrace)?;

        let mut builder = BitSetBuilder::new();
        if inner.trim().is_empty() {
            return Ok(builder.build());
        }

        for (position, element) in inner.split(',').enumerate() {
            let element = element.trim();
            if element.is_empty() {
                return Err(ParseBitSetError::EmptyElement { position });
            }
            let x = element
                .parse::<u64>()
                .map_err(|source| ParseBitSetError::InvalidElement {
                    element: element.to_owned(),
                    source,
                })?;
            if x > Self::MAX_PARSED_MEMBER as u64 {
                return Err(ParseBitSetError::ElementTooLarge {
                    element: element.to_owned(),
                    max: Self::MAX_PARSED_MEMBER,
                });
            }
            builder.insert(x as usize);
        }

        Ok(builder.build())
    }
}

/// Mutable accumulator that publishes an immutable [`BitSet`].
///
/// The buffer is normalized after every write, so [`build`](Self::build) only
/// moves it into the set.
#[derive(Clone, Debug, Default)]
pub struct BitSetBuilder {
    words: Vec<u64>,
}

impl BitSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with room for members below `bits` without
    /// reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(words_for_bits(bits)),
        }
    }

    /// Adds `x`. Returns `true` if it was not already present.
    pub fn insert(&mut self, x: usize) -> bool {
        let idx = word_index(x);
        let word = self.words.get(idx).copied().unwrap_or(0);
        let updated = word | bit_mask(x);
        if updated == word {
            return false;
        }
        update_word_in_place(&mut self.words, idx, updated);
        true
    }

    /// Removes `x`. Returns `true` if it was present.
    pub fn remove(&mut self, x: usize) -> bool {
        let idx = word_index(x);
        let word = self.words.get(idx).copied().unwrap_or(0);
        let updated = word & !bit_mask(x);
        if updated == word {
            return false;
        }
        update_word_in_place(&mut self.words, idx, updated);
        true
    }

    pub fn contains(&self, x: usize) -> bool {
        self.words
            .get(word_index(x))
            .is_some_and(|&w| w & bit_mask(x) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn build(self) -> BitSet {
        BitSet::from_normalized(self.words)
    }
}

impl Extend<usize> for BitSetBuilder {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}
