//! Post-assembly passes: length normalization, case, special-character injection.
//!
//! Lengths and indices count UTF-16 code units, the same units the hashes
//! consume. A cut through a surrogate pair leaves a U+FFFD in its place, which
//! is still one unit wide, so lengths stay exact.

use crate::config::Case;

pub const SPECIAL_CHARS: &[u8] = b"!@#$%^&*";

const PAD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PAD_ALPHABET_SPECIAL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// The first `n` UTF-16 code units of `s`.
pub fn utf16_prefix(s: &str, n: usize) -> String {
    let units: Vec<u16> = s.encode_utf16().take(n).collect();
    String::from_utf16_lossy(&units)
}

/// Truncate or pad `id` to exactly `target` units.
///
/// Padding appends `alphabet[(hash_number + current_len) % alphabet.len()]`
/// one unit at a time, so the fill depends only on the hash and position.
pub fn normalize_length(
    id: &str,
    target: usize,
    hash_number: u32,
    use_special_chars: bool,
) -> String {
    let alphabet = if use_special_chars {
        PAD_ALPHABET_SPECIAL
    } else {
        PAD_ALPHABET
    };

    let mut units: Vec<u16> = id.encode_utf16().collect();
    if units.len() > target {
        units.truncate(target);
    }
    while units.len() < target {
        let index = (hash_number as usize + units.len()) % alphabet.len();
        units.push(u16::from(alphabet[index]));
    }
    String::from_utf16_lossy(&units)
}

/// Apply the configured case.
///
/// `Upper` leaves the string untouched. `Mixed` lowercases uppercase letters
/// at even unit positions only; surrogate halves are never recased.
pub fn apply_case(id: &str, case: Case) -> String {
    match case {
        Case::Upper => id.to_string(),
        Case::Lower => id.to_lowercase(),
        Case::Mixed => {
            let mut out = String::with_capacity(id.len());
            let mut i = 0;
            for c in id.chars() {
                if i % 2 == 0 && c.len_utf16() == 1 && c.is_uppercase() {
                    out.extend(c.to_lowercase());
                } else {
                    out.push(c);
                }
                i += c.len_utf16();
            }
            out
        }
    }
}

/// Replace every unit at index `i` where `(hash_number + i) % 5 == 0`
/// with `SPECIAL_CHARS[(hash_number + i) % 8]`, then clamp to `length`.
pub fn inject_special_chars(id: &str, hash_number: u32, length: usize) -> String {
    let units: Vec<u16> = id
        .encode_utf16()
        .enumerate()
        .map(|(i, unit)| {
            let n = hash_number as usize + i;
            if n % 5 == 0 {
                u16::from(SPECIAL_CHARS[n % SPECIAL_CHARS.len()])
            } else {
                unit
            }
        })
        .take(length)
        .collect();
    String::from_utf16_lossy(&units)
}

/// Clamp to at most `length` units.
pub fn clamp(id: &str, length: usize) -> String {
    utf16_prefix(id, length)
}
