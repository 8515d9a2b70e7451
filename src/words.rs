//! Word-array layout helpers and the normalizer.
//!
//! Integer `x` lives in word `x >> 6` at bit `x & 63`. A word array is
//! *normalized* when its last word is nonzero (or the array is empty); every
//! function here that produces an array produces a normalized one.

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of `u64` words needed to store `n` bits.
pub const fn words_for_bits(n: usize) -> usize {
    n.div_ceil(WORD_BITS)
}

/// Index of the word holding integer `x`.
#[inline(always)]
pub const fn word_index(x: usize) -> usize {
    x >> 6
}

/// Position of integer `x` inside its word.
#[inline(always)]
pub const fn bit_index(x: usize) -> u32 {
    (x & 63) as u32
}

/// Single-bit mask selecting integer `x` inside its word.
#[inline(always)]
pub const fn bit_mask(x: usize) -> u64 {
    1u64 << bit_index(x)
}

/// Returns `true` if `words` has no trailing zero word.
#[inline]
pub fn is_normalized(words: &[u64]) -> bool {
    words.last().is_none_or(|&w| w != 0)
}

/// Drops trailing zero words.
#[inline]
pub fn trim_trailing_zeros(words: &mut Vec<u64>) {
    let len = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    words.truncate(len);
    debug_assert!(is_normalized(words));
}

/// Returns a copy of `words` with `words[idx] = word`, normalized and of
/// minimal length.
///
/// Writing a nonzero word past the end grows the array to `idx + 1`; writing a
/// zero into the last word drops every trailing zero word. `words` must already
/// be normalized.
///
/// # Examples
/// ```
/// use wordset::words::updated_words;
///
/// assert_eq!(updated_words(&[], 2, 0b1), vec![0, 0, 0b1]);
/// assert_eq!(updated_words(&[1, 0, 4], 2, 0), vec![1]);
/// assert_eq!(updated_words(&[1], 5, 0), vec![1]);
/// ```
pub fn updated_words(words: &[u64], idx: usize, word: u64) -> Vec<u64> {
    debug_assert!(is_normalized(words), "input word array is not normalized");

    let len = words.len();
    if idx >= len {
        if word == 0 {
            return words.to_vec();
        }
        let mut out = Vec::with_capacity(idx + 1);
        out.extend_from_slice(words);
        out.resize(idx, 0);
        out.push(word);
        return out;
    }

    if word == 0 && idx + 1 == len {
        let mut out = words[..idx].to_vec();
        trim_trailing_zeros(&mut out);
        return out;
    }

    let mut out = words.to_vec();
    out[idx] = word;
    debug_assert!(is_normalized(&out));
    out
}

/// In-place form of [`updated_words`] for owned, mutable buffers.
pub fn update_word_in_place(words: &mut Vec<u64>, idx: usize, word: u64) {
    debug_assert!(is_normalized(words), "input word array is not normalized");

    if idx >= words.len() {
        if word != 0 {
            words.resize(idx, 0);
            words.push(word);
        }
        return;
    }

    words[idx] = word;
    if word == 0 && idx + 1 == words.len() {
        trim_trailing_zeros(words);
    }
    debug_assert!(is_normalized(words));
}
