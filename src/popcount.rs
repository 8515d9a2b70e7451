//! Table-driven population count.
//!
//! A 256-entry table holds the number of set bits of every byte value. Words are
//! counted by folding 64 -> 32 -> 16 -> 8 bits and summing byte lookups, so
//! counting a word never loops over individual bits.

/// Number of set bits for every byte value, indexed by the byte.
///
/// Built once by a `const fn` and placed in read-only memory; every caller in
/// the process shares the same table.
pub static BYTE_POPCOUNT: [u8; 256] = build_table();

const fn count_bits(x: u8) -> u8 {
    if x == 0 { 0 } else { (x & 1) + count_bits(x >> 1) }
}

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = count_bits(i as u8);
        i += 1;
    }
    table
}

/// Returns the number of set bits in `byte`.
#[inline]
pub fn byte_popcount(byte: u8) -> u32 {
    BYTE_POPCOUNT[byte as usize] as u32
}

#[inline(always)]
fn popcount16(v: u16) -> u32 {
    byte_popcount(v as u8) + byte_popcount((v >> 8) as u8)
}

#[inline(always)]
fn popcount32(v: u32) -> u32 {
    popcount16(v as u16) + popcount16((v >> 16) as u16)
}

/// Returns the number of set bits in `word`.
///
/// # Examples
/// ```
/// use wordset::popcount::word_popcount;
///
/// assert_eq!(word_popcount(0), 0);
/// assert_eq!(word_popcount(0b1011), 3);
/// assert_eq!(word_popcount(u64::MAX), 64);
/// ```
#[inline]
pub fn word_popcount(word: u64) -> u32 {
    let count = popcount32(word as u32) + popcount32((word >> 32) as u32);
    debug_assert_eq!(count, word.count_ones());
    count
}
