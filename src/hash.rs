//! The three string hashes behind the hash field.
//!
//! Input is consumed as UTF-16 code units. Every algorithm folds into a 32-bit
//! signed integer with wrapping arithmetic and returns its absolute value, so
//! results are identical across platforms and runs.

use crate::config::HashAlgorithm;

const DJB2_SEED: i32 = 5381;
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: i32 = 0x0100_0193;

/// `hash = (hash << 5) - hash + c`, seeded at 0.
pub fn simple(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0_i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// `hash = hash * 33 + c`, seeded at 5381.
pub fn djb2(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(DJB2_SEED, |hash, unit| {
            hash.wrapping_mul(33).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// FNV-1a: xor the code unit in, then multiply by the FNV prime.
///
/// The multiply is the same as adding `(h<<1)+(h<<4)+(h<<7)+(h<<8)+(h<<24)` to `h`.
pub fn fnv1a(input: &str) -> u32 {
    #[allow(clippy::cast_possible_wrap)]
    let seed = FNV_OFFSET_BASIS as i32;
    input
        .encode_utf16()
        .fold(seed, |hash, unit| {
            (hash ^ i32::from(unit)).wrapping_mul(FNV_PRIME)
        })
        .unsigned_abs()
}

impl HashAlgorithm {
    pub fn compute(self, input: &str) -> u32 {
        match self {
            Self::Simple => simple(input),
            Self::Djb2 => djb2(input),
            Self::Fnv1a => fnv1a(input),
        }
    }
}

/// Reduce a hash to the 0..=9999 range used for the hash field.
pub const fn hash_number(hash: u32) -> u32 {
    hash % 10_000
}

/// Render a hash number as the zero-padded 4-digit hash field.
pub fn hash_field(hash_number: u32) -> String {
    format!("{hash_number:04}")
}
