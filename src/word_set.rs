//! Set algebra over word arrays.
//!
//! [`WordSet`] is the capability every concrete bitset supplies: a stored word
//! count, an indexed word accessor, and a factory that builds the concrete type
//! from a finished word array. Everything else (counting, membership,
//! enumeration, union and friends) is provided on top of those three methods
//! and never looks at the concrete representation.
//!
//! Word `i` holds integers `[64 * i, 64 * i + 63]`. Any word index at or past
//! [`WordSet::word_len`] reads as zero, so operands of different lengths combine
//! without padding.

use core::cmp::{max, min};
use core::fmt;
use core::iter::FusedIterator;

use crate::popcount::word_popcount;
use crate::words::{WORD_BITS, bit_mask, word_index};

/// A set of non-negative integers stored as a sequence of `u64` words.
///
/// Implementors provide [`word_len`](Self::word_len), [`word`](Self::word) and
/// [`from_words`](Self::from_words). Algebra results are always built through
/// `from_words`, so an operation on a value of type `T` returns a `T`.
///
/// `union` and `symmetric_difference` combine two sets of the same type, so the
/// result never holds a member the left operand's type cannot store. The
/// right operand of `intersection`, `difference` and the relation queries may
/// be any other `WordSet`; their results only keep bits the left operand
/// already has.
///
/// # Examples
/// ```
/// use wordset::{BitSet, WordSet};
///
/// let a: BitSet = [1, 3, 64, 65].into_iter().collect();
/// let b: BitSet = [1, 2, 64].into_iter().collect();
///
/// assert_eq!(a.union(&b).to_string(), "{1, 2, 3, 64, 65}");
/// assert_eq!(a.intersection(&b).to_string(), "{1, 64}");
/// assert_eq!(a.difference(&b).to_string(), "{3, 65}");
/// assert_eq!(a.symmetric_difference(&b).to_string(), "{2, 3, 65}");
/// assert!(!a.is_subset(&b));
/// ```
pub trait WordSet: Sized {
    /// Number of stored words.
    fn word_len(&self) -> usize;

    /// Word at `idx`, or `0` when `idx >= word_len()`.
    fn word(&self, idx: usize) -> u64;

    /// Builds a set from a finished word array.
    fn from_words(words: Vec<u64>) -> Self;

    /// Number of members.
    fn count(&self) -> usize {
        (0..self.word_len())
            .map(|i| word_popcount(self.word(i)) as usize)
            .sum()
    }

    /// Returns `true` when there are no members.
    fn is_empty(&self) -> bool {
        (0..self.word_len()).all(|i| self.word(i) == 0)
    }

    /// Returns whether `x` is a member.
    ///
    /// Values that do not convert to `usize` (negative integers in particular)
    /// are never members.
    #[inline]
    fn contains<I: TryInto<usize>>(&self, x: I) -> bool {
        match x.try_into() {
            Ok(x) => self.word(word_index(x)) & bit_mask(x) != 0,
            Err(_) => false,
        }
    }

    /// Iterates over members in ascending order.
    ///
    /// Each call starts a fresh scan from zero.
    #[inline]
    fn iter(&self) -> Members<'_, Self> {
        Members::new(self)
    }

    /// Calls `visit` with every member in ascending order.
    fn for_each_member<F: FnMut(usize)>(&self, mut visit: F) {
        for word_idx in 0..self.word_len() {
            let mut word = self.word(word_idx);
            while word != 0 {
                visit(word_idx * WORD_BITS + word.trailing_zeros() as usize);
                word &= word - 1;
            }
        }
    }

    /// Lowest member, if any.
    fn first(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Highest member, if any.
    fn last(&self) -> Option<usize> {
        (0..self.word_len()).rev().find_map(|word_idx| {
            let word = self.word(word_idx);
            (word != 0).then(|| word_idx * WORD_BITS + (63 - word.leading_zeros() as usize))
        })
    }

    /// Members of either set.
    fn union(&self, other: &Self) -> Self {
        let len = max(self.word_len(), other.word_len());
        Self::from_words((0..len).map(|i| self.word(i) | other.word(i)).collect())
    }

    /// Members of both sets.
    ///
    /// Only the words both operands store are computed; past the shorter
    /// operand every word of the result would be zero.
    fn intersection<O: WordSet>(&self, other: &O) -> Self {
        let len = min(self.word_len(), other.word_len());
        Self::from_words((0..len).map(|i| self.word(i) & other.word(i)).collect())
    }

    /// Members of `self` that are not members of `other`.
    ///
    /// The result has exactly `self.word_len()` words before normalization.
    fn difference<O: WordSet>(&self, other: &O) -> Self {
        let len = self.word_len();
        Self::from_words((0..len).map(|i| self.word(i) & !other.word(i)).collect())
    }

    /// Members of exactly one of the two sets.
    fn symmetric_difference(&self, other: &Self) -> Self {
        let len = max(self.word_len(), other.word_len());
        Self::from_words((0..len).map(|i| self.word(i) ^ other.word(i)).collect())
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    ///
    /// Only `self`'s stored words are checked.
    fn is_subset<O: WordSet>(&self, other: &O) -> bool {
        (0..self.word_len()).all(|i| self.word(i) & !other.word(i) == 0)
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    fn is_superset<O: WordSet>(&self, other: &O) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no member.
    fn is_disjoint<O: WordSet>(&self, other: &O) -> bool {
        let len = min(self.word_len(), other.word_len());
        (0..len).all(|i| self.word(i) & other.word(i) == 0)
    }

    /// Set equality, independent of stored length or concrete type.
    fn same_members<O: WordSet>(&self, other: &O) -> bool {
        let len = max(self.word_len(), other.word_len());
        (0..len).all(|i| self.word(i) == other.word(i))
    }

    /// Copies out the stored words.
    fn to_words(&self) -> Vec<u64> {
        (0..self.word_len()).map(|i| self.word(i)).collect()
    }

    /// Writes `prefix`, the members joined by `separator`, then `suffix`.
    fn write_members<W: fmt::Write>(
        &self,
        out: &mut W,
        prefix: &str,
        separator: &str,
        suffix: &str,
    ) -> fmt::Result {
        out.write_str(prefix)?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(separator)?;
            }
            write!(out, "{member}")?;
        }
        out.write_str(suffix)
    }

    /// Renders `prefix`, the members joined by `separator`, then `suffix`.
    ///
    /// Meant for diagnostics.
    fn format_members(&self, prefix: &str, separator: &str, suffix: &str) -> String {
        let mut out = String::with_capacity(prefix.len() + suffix.len());
        self.write_members(&mut out, prefix, separator, suffix)
            .expect("writing to a String cannot fail");
        out
    }
}

/// Ascending iterator over the members of a [`WordSet`], produced by
/// [`WordSet::iter`].
///
/// Words are read lazily through [`WordSet::word`]; the scan never goes past
/// `word_len() * 64`.
pub struct Members<'a, S: WordSet> {
    set: &'a S,
    word_len: usize,
    word_idx: usize,
    current_word: u64,
}

impl<'a, S: WordSet> Members<'a, S> {
    fn new(set: &'a S) -> Self {
        let word_len = set.word_len();
        Self {
            set,
            word_len,
            word_idx: 0,
            current_word: if word_len > 0 { set.word(0) } else { 0 },
        }
    }
}

impl<S: WordSet> Clone for Members<'_, S> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            word_len: self.word_len,
            word_idx: self.word_idx,
            current_word: self.current_word,
        }
    }
}

impl<S: WordSet> Iterator for Members<'_, S> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                // Clear the lowest set bit.
                self.current_word &= self.current_word - 1;
                return Some(self.word_idx * WORD_BITS + bit_idx);
            }

            if self.word_idx + 1 >= self.word_len {
                self.word_idx = self.word_len;
                return None;
            }
            self.word_idx += 1;
            self.current_word = self.set.word(self.word_idx);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.word_len.saturating_sub(self.word_idx + 1) * WORD_BITS;
        let upper = rest + self.current_word.count_ones() as usize;
        (0, Some(upper))
    }
}

impl<S: WordSet> FusedIterator for Members<'_, S> {}
