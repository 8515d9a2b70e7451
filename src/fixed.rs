//! Fixed-capacity bitset stored inline as `[u64; WORDS]`; capacity is compile-time known.

use core::fmt;

use crate::word_set::WordSet;
use crate::words::{WORD_BITS, bit_mask, word_index};

/// Immutable bitset over `[0, N)` backed by an array of `u64` words.
///
/// `WORDS` must equal `words_for_bits(N)`; this is checked at compile time.
/// The stored array always has `WORDS` words and never holds a bit at or above
/// `N`. Single-element updates take `self` by value and return the updated set.
///
/// # Examples
/// ```
/// use wordset::{FixedBitSet, WordSet, words::words_for_bits};
///
/// type Set8 = FixedBitSet<8, { words_for_bits(8) }>;
///
/// let bits = Set8::empty().with(1).with(3);
/// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(bits.first_unset(), Some(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBitSet<const N: usize, const WORDS: usize> {
    words: [u64; WORDS],
}

impl<const N: usize, const WORDS: usize> FixedBitSet<N, WORDS> {
    const VALID: () = {
        assert!(N > 0, "FixedBitSet capacity must be > 0");
        assert!(WORDS == N.div_ceil(64), "WORDS must equal N.div_ceil(64)");
    };

    /// Bits of the last word that lie inside `[0, N)`.
    const LAST_WORD_MASK: u64 = match N % WORD_BITS {
        0 => u64::MAX,
        rem => (1u64 << rem) - 1,
    };

    /// Returns the number of addressable bits (`N`).
    #[inline(always)]
    pub const fn capacity() -> usize {
        let () = Self::VALID;
        N
    }

    /// Creates an empty bitset.
    #[inline]
    pub const fn empty() -> Self {
        let () = Self::VALID;
        Self {
            words: [0u64; WORDS],
        }
    }

    /// Creates a bitset holding every integer in `[0, N)`.
    #[inline]
    pub const fn full() -> Self {
        let () = Self::VALID;
        let mut words = [u64::MAX; WORDS];
        words[WORDS - 1] = Self::LAST_WORD_MASK;
        Self { words }
    }

    /// The stored words.
    #[inline]
    pub const fn words(&self) -> &[u64; WORDS] {
        &self.words
    }

    /// Returns `true` when every integer in `[0, N)` is a member.
    pub const fn is_full(&self) -> bool {
        let mut i = 0;
        while i + 1 < WORDS {
            if self.words[i] != u64::MAX {
                return false;
            }
            i += 1;
        }
        self.words[WORDS - 1] == Self::LAST_WORD_MASK
    }

    /// Lowest integer in `[0, N)` that is not a member; `None` when full.
    pub const fn first_unset(&self) -> Option<usize> {
        let mut word_idx = 0;
        while word_idx < WORDS {
            let inverted = !self.words[word_idx];
            if inverted != 0 {
                let idx = word_idx * WORD_BITS + inverted.trailing_zeros() as usize;
                // The only unset bits of the last word may lie past capacity.
                return if idx < N { Some(idx) } else { None };
            }
            word_idx += 1;
        }
        None
    }

    /// Returns this set with `idx` added.
    ///
    /// Panics if `idx >= N`.
    #[inline]
    pub const fn with(mut self, idx: usize) -> Self {
        assert!(idx < N, "bit index out of bounds");
        self.words[word_index(idx)] |= bit_mask(idx);
        self
    }

    /// Returns this set with `idx` removed.
    ///
    /// Panics if `idx >= N`.
    #[inline]
    pub const fn without(mut self, idx: usize) -> Self {
        assert!(idx < N, "bit index out of bounds");
        self.words[word_index(idx)] &= !bit_mask(idx);
        self
    }
}

impl<const N: usize, const WORDS: usize> Default for FixedBitSet<N, WORDS> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize, const WORDS: usize> WordSet for FixedBitSet<N, WORDS> {
    #[inline]
    fn word_len(&self) -> usize {
        WORDS
    }

    #[inline]
    fn word(&self, idx: usize) -> u64 {
        if idx < WORDS { self.words[idx] } else { 0 }
    }

    /// Builds a set from `words`, zero-padding short input.
    ///
    /// Panics if `words` holds a member at or above `N`. The set algebra never
    /// produces such input: `union` and `symmetric_difference` only take
    /// another `FixedBitSet<N, WORDS>`, and the mixed-operand operations keep
    /// only bits `self` already has.
    fn from_words(words: Vec<u64>) -> Self {
        let mut set = Self::empty();
        for (i, &word) in words.iter().enumerate() {
            if i < WORDS {
                set.words[i] = word;
            } else {
                assert_eq!(word, 0, "member beyond FixedBitSet capacity");
            }
        }
        assert_eq!(
            set.words[WORDS - 1] & !Self::LAST_WORD_MASK,
            0,
            "member beyond FixedBitSet capacity"
        );
        set
    }
}

impl<const N: usize, const WORDS: usize> fmt::Display for FixedBitSet<N, WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_members(f, "{", ", ", "}")
    }
}

impl<const N: usize, const WORDS: usize> fmt::Debug for FixedBitSet<N, WORDS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_members(f, "FixedBitSet {", ", ", "}")
    }
}
