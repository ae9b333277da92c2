//! Edit distances between byte strings.
//!
//! Comparison is byte-wise: no case-folding, no Unicode normalization. Two
//! strings that render identically but are encoded differently are treated
//! as different.

use alloc::vec::Vec;

use crate::number::UInt;

/// Computes the Levenshtein distance between two byte strings.
///
/// The Levenshtein distance is defined as the minimum number of edits
/// needed to transform one string into the other, with the allowable
/// edit operations being insertion, deletion, or substitution of a
/// single byte.
///
/// We use the Wagner-Fischer algorithm, keeping only two rows of the
/// dynamic-programming table alive at a time. The longer input drives the
/// outer loop, so memory use is linear in the length of the shorter input.
///
/// The input strings are not required to be of the same length. If either
/// input is empty, the distance is the length of the other.
///
/// The distance saturates at `U::MAX`, so a narrow `U` reports its maximum
/// for inputs that are further apart than it can count.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// # Examples
///
/// ```
/// use aerodist::strings::levenshtein;
///
/// let distance: u16 = levenshtein(b"kitten", b"sitting");
/// assert_eq!(distance, 3);
///
/// let distance: u16 = levenshtein(b"flaw", b"lawn");
/// assert_eq!(distance, 2);
///
/// let distance: u16 = levenshtein(b"", b"KJFK");
/// assert_eq!(distance, 4);
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
#[must_use]
pub fn levenshtein<U: UInt>(a: &[u8], b: &[u8]) -> U {
    U::from_usize(if a.is_empty() {
        b.len()
    } else if b.is_empty() {
        a.len()
    } else if a.len() < b.len() {
        // the shorter string indexes the rows
        _levenshtein(b, a)
    } else {
        _levenshtein(a, b)
    })
}

/// Computes the Levenshtein distance between the UTF-8 bytes of two strings.
///
/// See [`levenshtein`]. A multi-byte character that differs in every byte
/// counts as several edits.
///
/// # Examples
///
/// ```
/// use aerodist::strings::levenshtein_str;
///
/// let distance: u32 = levenshtein_str("Heathrow", "Heathrow Airport");
/// assert_eq!(distance, 8);
/// ```
#[must_use]
pub fn levenshtein_str<U: UInt>(a: &str, b: &str) -> U {
    levenshtein(a.as_bytes(), b.as_bytes())
}

/// Helper for Levenshtein distance. Requires `b` to be non-empty and no
/// longer than `a`.
fn _levenshtein(a: &[u8], b: &[u8]) -> usize {
    // row 0 of the table: inserting `j` bytes into an empty source
    let mut cur: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        // `pre` holds the diagonal cell M[i-1][j-1]
        let mut pre = cur[0];
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let tmp = cur[j + 1];
            cur[j + 1] = core::cmp::min(
                // deletion
                tmp + 1,
                core::cmp::min(
                    // insertion
                    cur[j] + 1,
                    // match or substitution
                    pre + usize::from(ca != cb),
                ),
            );
            pre = tmp;
        }
    }
    cur[b.len()]
}
