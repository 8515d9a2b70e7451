//! Immutable word-packed bitsets.
//!
//! A set of non-negative integers is stored as a sequence of `u64` words, word
//! `i` holding the integers `[64 * i, 64 * i + 63]`. The [`WordSet`] trait
//! provides the whole set algebra on top of three accessors, and the concrete
//! types decide how words are stored:
//!
//! - [`BitSet`]: heap-backed, growable, always normalized (no trailing zero
//!   words), built in bulk with [`BitSetBuilder`].
//! - [`FixedBitSet`]: inline `[u64; WORDS]` with a compile-time capacity.
//!
//! Every operation returns a new set; published sets are never mutated and can
//! be shared across threads freely.

pub mod bitset;
pub mod error;
pub mod fixed;
pub mod popcount;
#[doc(hidden)]
pub mod test_utils;
pub mod word_set;
pub mod words;

pub use bitset::{BitSet, BitSetBuilder};
pub use error::ParseBitSetError;
pub use fixed::FixedBitSet;
pub use word_set::{Members, WordSet};
