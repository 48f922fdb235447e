// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities and fixtures shared across integration tests.

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Verbosity follows `RUST_LOG` (default: warnings only), e.g.
/// `RUST_LOG=arrays_and_strings=trace cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub const UNIQUE: &[&str] = &[
    "",
    " ",
    "a",
    "123456789",
    "1q2w3e4r5t6y7u8i9ozasxdcfvgbhnjm[]#;",
];

pub const NOT_UNIQUE: &[&str] = &["  ", "asdfghjka", "q2w3e4r5t6y75", "lkjlkj", "l#odfh#"];

pub const PERMUTATIONS: &[(&str, &str)] = &[
    ("", ""),
    (" ", " "),
    ("qwertyui", "qweriuyt"),
    ("ababababa", "bbaabaaab"),
    ("123123456789", "123456789123"),
    ("][p;]12345zxcvb", "bz;v2xc]134p[5]"),
];

pub const NOT_PERMUTATIONS: &[(&str, &str)] = &[
    ("", " "),
    ("qwerdyui", "qweriuyt"),
    ("babababab", "bbaabaaab"),
    ("12312456789", "12345678123"),
    ("][p;]123456zxcvb", "bz;v2xc]134p[5]"),
];

/// (input, expected) pairs for URL space-encoding.
pub const URLIFIED: &[(Option<&str>, Option<&str>)] = &[
    (Some("Mr Cem Kebabson"), Some("Mr%20Cem%20Kebabson")),
    (Some("  Mr Cem Kebabson  "), Some("Mr%20Cem%20Kebabson")),
    (Some("Mr  Cem  Kebabson"), Some("Mr%20%20Cem%20%20Kebabson")),
    (Some("   "), Some("")),
    (Some("testing"), Some("testing")),
    (Some("test ing"), Some("test%20ing")),
    (Some("%20 %20"), Some("%20%20%20")),
    (None, None),
];

pub const PALINDROME_PERMUTATIONS: &[&str] = &[
    " ",
    "   ",
    "aabb",
    "ab a b",
    " a b a b ",
    "sasadfgsadfghjk;hjk;sadfghjk;dfghjk;",
    "sa sadfgsadfgh jk;hjkz;sadfg hjk;dfghjk;",
    "asdasd",
    "ey edip adanada pide ye",
    "taco cat",
];

pub const NOT_PALINDROME_PERMUTATIONS: &[Option<&str>] = &[
    Some(""),
    None,
    Some("a b"),
    Some("asda"),
    Some("ey edip adanada kedi ye"),
    Some("taco catp"),
];

pub const ONE_AWAY: &[(&str, &str)] = &[
    ("kebab", "kebab"),
    ("pale", "ple"),
    ("pales", "pale"),
    ("pale", "bale"),
    ("pale", "pxle"),
    ("pale", "pate"),
    ("pale", "pald"),
    ("answers", "answer"),
    ("technology", "etechnology"),
];

pub const NOT_ONE_AWAY: &[(&str, &str)] = &[
    ("pale", "pl"),
    ("paless", "pale"),
    ("pale", "bales"),
    ("pale", "bake"),
    ("abc", "abcde"),
    ("abcdefghiz", "ihgfedcbaa"),
    ("1122334455667788", "9911223344556677"),
    ("45678", "1239"),
    ("abcd", "dcba"),
];

/// Inputs that compression must return unchanged.
pub const NOT_COMPRESSED: &[Option<&str>] = &[
    Some(""),
    None,
    Some("a"),
    Some("aa"),
    Some("abc"),
    Some("aabbcc"),
    Some("ababababccab"),
    Some("aaab"),
    Some("abcABCddd"),
];

pub const COMPRESSED: &[(&str, &str)] = &[
    ("aaa", "3a"),
    ("bbbbbb", "6b"),
    ("abbbbbbc", "1a6b1c"),
    ("aaabccc", "3a1b3c"),
    ("hhellllllllooooo!", "2h1e8l5o1!"),
    ("woorrrllllddddd", "1w2o3r4l5d"),
];

/// (original, rotated 90° clockwise) pairs.
pub fn rotations() -> Vec<(Vec<Vec<i64>>, Vec<Vec<i64>>)> {
    vec![
        (vec![vec![1]], vec![vec![1]]),
        (vec![vec![1, 2], vec![3, 4]], vec![vec![3, 1], vec![4, 2]]),
        (
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
            vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]],
        ),
        (
            vec![
                vec![1, 2, 3, 4],
                vec![5, 6, 7, 8],
                vec![9, 10, 11, 12],
                vec![13, 14, 15, 16],
            ],
            vec![
                vec![13, 9, 5, 1],
                vec![14, 10, 6, 2],
                vec![15, 11, 7, 3],
                vec![16, 12, 8, 4],
            ],
        ),
    ]
}
