#![allow(missing_docs)]

use rand::prelude::*;
use test_case::test_case;

use aerodist::strings::{levenshtein, levenshtein_str};

/// Generates `cardinality` random strings over `alphabet` with lengths in
/// `[min_len, max_len]`.
fn random_strings(cardinality: usize, min_len: usize, max_len: usize, alphabet: &[u8], seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
        })
        .collect()
}

/// Full-table Wagner-Fischer, kept deliberately naive for cross-checking.
fn full_table(a: &[u8], b: &[u8]) -> usize {
    let width = b.len() + 1;
    let mut table = vec![0_usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }
    table[a.len() * width + b.len()]
}

#[test_case(b"kitten", b"sitting", 3 ; "kitten_sitting")]
#[test_case(b"", b"", 0 ; "both_empty")]
#[test_case(b"flaw", b"lawn", 2 ; "flaw_lawn")]
#[test_case(b"KJFK", b"", 4 ; "empty_target")]
#[test_case(b"", b"EGLL", 4 ; "empty_source")]
#[test_case(b"EGLL", b"EGLL", 0 ; "identical")]
#[test_case(b"EGLL", b"egll", 4 ; "case_sensitive")]
#[test_case(b"Lufthansa", b"Lufthansa Cargo", 6 ; "suffix")]
#[test_case(b"NAJIBEATSPEPPERS", b"NAJIBPEPPERSEATS", 8 ; "rotation")]
fn known_distances(a: &[u8], b: &[u8], expected: u64) {
    assert_eq!(levenshtein::<u64>(a, b), expected);
    assert_eq!(levenshtein::<u64>(b, a), expected);
}

#[test]
fn bytes_not_characters() {
    // 'é' is two bytes in UTF-8 and differs from 'e' in both
    assert_eq!(levenshtein_str::<u8>("cafe", "café"), 2);
    assert_eq!(levenshtein_str::<u8>("café", "café"), 0);
}

#[test]
fn output_types_agree() {
    let (a, b) = (b"Air Canada".as_slice(), b"Air China".as_slice());
    let expected = levenshtein::<usize>(a, b);
    assert_eq!(usize::from(levenshtein::<u8>(a, b)), expected);
    assert_eq!(usize::from(levenshtein::<u16>(a, b)), expected);
    assert_eq!(levenshtein::<u64>(a, b), expected as u64);
}

#[test]
fn narrow_outputs_saturate() {
    let long = [b'A'; 300];
    assert_eq!(levenshtein::<u8>(&long, b""), u8::MAX);
    assert_eq!(levenshtein::<u8>(b"B", &long), u8::MAX);
    assert_eq!(levenshtein::<u16>(&long, b"B"), 300);

    let edge = [b'A'; 255];
    assert_eq!(levenshtein::<u8>(&edge, b""), 255);
}

#[test]
fn empty_inputs() {
    let strings = random_strings(50, 0, 40, b"ACGT", 7);
    for s in &strings {
        assert_eq!(levenshtein::<usize>(s, b""), s.len());
        assert_eq!(levenshtein::<usize>(b"", s), s.len());
        assert_eq!(levenshtein::<usize>(s, s), 0);
    }
}

#[test]
fn matches_full_table() {
    let strings = random_strings(40, 0, 30, b"ABCDE", 42);
    for a in &strings {
        for b in &strings {
            assert_eq!(levenshtein::<usize>(a, b), full_table(a, b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn symmetry_and_triangle_inequality() {
    let strings = random_strings(25, 0, 20, b"XYZ", 13);
    for a in &strings {
        for b in &strings {
            let ab = levenshtein::<usize>(a, b);
            assert_eq!(ab, levenshtein::<usize>(b, a));
            for c in &strings {
                let ac = levenshtein::<usize>(a, c);
                let bc = levenshtein::<usize>(b, c);
                assert!(ac <= ab + bc, "{a:?} {b:?} {c:?}");
            }
        }
    }
}

#[test]
fn bounded_by_longer_length() {
    let strings = random_strings(30, 0, 50, b"01", 99);
    for a in &strings {
        for b in &strings {
            let d = levenshtein::<usize>(a, b);
            assert!(d <= a.len().max(b.len()));
            assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
