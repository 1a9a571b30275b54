use proptest::prelude::*;
use quickcheck_macros::quickcheck;

use crate::view;
use crate::{
    SplitSide,
    ToZString,
    ZString,
    ZStringExt,
};

// generates arbitrary byte contents, interior zeros included, upto 80 bytes
fn rand_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..80)
}

proptest! {
    #[test]
    fn bytes_roundtrip(bytes in rand_bytes()) {
        let zstring = ZString::from(bytes.as_slice());

        prop_assert_eq!(zstring.as_bytes(), bytes.as_slice());
        prop_assert_eq!(zstring.len(), bytes.len());
        prop_assert_eq!(zstring.as_bytes_with_nul().last(), Some(&0u8));
        prop_assert_eq!(zstring.as_bytes_with_nul().len(), bytes.len() + 1);
    }

    #[test]
    fn reverse_twice_is_identity(bytes in rand_bytes()) {
        let mut zstring = ZString::from(bytes.as_slice());

        zstring.reverse();
        zstring.reverse();

        prop_assert_eq!(zstring.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn reverse_matches_std(bytes in rand_bytes()) {
        let mut zstring = ZString::from(bytes.as_slice());
        zstring.reverse();

        let expected: Vec<u8> = bytes.iter().rev().copied().collect();
        prop_assert_eq!(zstring.as_bytes(), expected.as_slice());
    }

    #[test]
    fn lowercase_is_idempotent(bytes in rand_bytes()) {
        let once = ZString::from(bytes.as_slice()).to_lowercase();
        let twice = once.to_lowercase();

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|b| !b.is_ascii_uppercase()));
    }

    #[test]
    fn contains_every_substring(bytes in rand_bytes(), start in 0usize..80, len in 0usize..80) {
        let zstring = ZString::from(bytes.as_slice());

        let start = start.min(bytes.len());
        let end = (start + len).min(bytes.len());

        prop_assert!(zstring.contains(&bytes[start..end]));
    }

    #[test]
    fn contains_the_empty_needle(bytes in rand_bytes()) {
        prop_assert!(ZString::from(bytes.as_slice()).contains(b""));
    }

    #[test]
    fn compare_agrees_with_slice_ordering(a in rand_bytes(), b in rand_bytes()) {
        let lhs = ZString::from(a.as_slice());
        let rhs = ZString::from(b.as_slice());

        prop_assert_eq!(lhs.compare(&rhs), a.cmp(&b));
        prop_assert_eq!(lhs.compare(&rhs), rhs.compare(&lhs).reverse());
        prop_assert_eq!(lhs.cmp(&rhs), a.cmp(&b));
    }

    // joining the segments back together reconstructs the contents, up to
    // the one trailing delimiter that never produces a segment
    #[test]
    fn split_then_join_reconstructs(bytes in rand_bytes(), delim in any::<u8>()) {
        let zstring = ZString::from(bytes.as_slice());

        let joined = zstring.split_views(delim, 0).join_zstring([delim]);

        let mut expected = bytes.clone();
        if expected.last() == Some(&delim) {
            expected.pop();
        }
        prop_assert_eq!(joined.as_bytes(), expected.as_slice());
    }

    #[test]
    fn split_segments_hold_no_delimiter(bytes in rand_bytes(), delim in any::<u8>()) {
        let zstring = ZString::from(bytes.as_slice());

        for segment in zstring.split_views(delim, 0) {
            prop_assert!(!view::contains_byte(segment, delim));
        }
    }

    #[test]
    fn integers_roundtrip_through_text(n in any::<i64>()) {
        prop_assert_eq!(n.to_zstring().parse::<i64>(), Some(n));
    }

    #[test]
    fn floats_roundtrip_through_text(n in any::<f64>()) {
        let parsed = n.to_zstring().parse::<f64>().unwrap();
        if n.is_nan() {
            prop_assert!(parsed.is_nan());
        } else {
            prop_assert_eq!(parsed, n);
        }
    }

    #[test]
    fn append_concatenates(a in rand_bytes(), b in rand_bytes()) {
        let mut zstring = ZString::from(a.as_slice());
        zstring.append(b.as_slice()).unwrap();

        let mut expected = a.clone();
        expected.extend_from_slice(&b);

        prop_assert_eq!(zstring.as_bytes(), expected.as_slice());
        prop_assert_eq!(zstring.as_bytes_with_nul().last(), Some(&0u8));
    }

    #[test]
    fn push_then_pop_returns_the_byte(bytes in rand_bytes(), byte in any::<u8>()) {
        let mut zstring = ZString::from(bytes.as_slice());

        zstring.push_byte(byte).unwrap();
        prop_assert_eq!(zstring.pop_byte(), Some(byte));
        prop_assert_eq!(zstring.as_bytes(), bytes.as_slice());
    }
}

#[quickcheck]
fn quickcheck_clone_is_equal(bytes: Vec<u8>) -> bool {
    let zstring = ZString::from(bytes.as_slice());
    zstring.clone() == zstring
}

#[quickcheck]
fn quickcheck_erase_range_drains(bytes: Vec<u8>) -> bool {
    let mut zstring = ZString::from(bytes.as_slice());
    zstring.erase_range(..).unwrap();
    zstring.is_empty()
}

#[test]
fn empty_is_still_terminated() {
    let strs = [ZString::new(), ZString::from(""), ZString::default()];

    for zstring in strs {
        assert!(zstring.is_empty());
        assert_eq!(zstring.as_bytes_with_nul(), b"\0");
        assert!(!zstring.as_ptr().is_null());
    }
}

#[test]
fn interior_zeros_are_contents() {
    let zstring = ZString::from(b"ab\0cd");

    assert_eq!(zstring.len(), 5);
    assert_eq!(zstring.at(2), Ok(0));
    assert_eq!(zstring.as_bytes_with_nul(), b"ab\0cd\0");
    assert!(zstring.contains_byte(0));
}

#[test]
fn at_checks_the_bounds() {
    let zstring = ZString::from("abc");

    assert_eq!(zstring.at(0), Ok(b'a'));
    assert_eq!(zstring.at(2), Ok(b'c'));
    assert_eq!(
        zstring.at(3),
        Err(crate::Error::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn resize_grows_and_shrinks() {
    let mut zstring = ZString::from("ab");

    zstring.resize(5, b'x').unwrap();
    assert_eq!(zstring, "abxxx");

    zstring.resize(5, b'y').unwrap();
    assert_eq!(zstring, "abxxx");

    zstring.resize(0, b'z').unwrap();
    assert!(zstring.is_empty());
    assert_eq!(zstring.as_bytes_with_nul(), b"\0");

    assert!(zstring.resize(ZString::MAX_LENGTH + 1, b'!').is_err());
}

#[test]
fn erase_shifts_the_tail() {
    let mut zstring = ZString::from("hello world");

    zstring.erase(0, 6).unwrap();
    assert_eq!(zstring, "world");

    zstring.erase(4, 10).unwrap();
    assert_eq!(zstring, "worl");

    zstring.erase(4, 1).unwrap();
    assert_eq!(zstring, "worl");

    assert!(zstring.erase(5, 0).is_err());
    assert_eq!(zstring.as_bytes_with_nul(), b"worl\0");
}

#[test]
fn erase_range_bounds() {
    let mut zstring = ZString::from("abcdef");

    zstring.erase_range(1..3).unwrap();
    assert_eq!(zstring, "adef");

    zstring.erase_range(2..=3).unwrap();
    assert_eq!(zstring, "ad");

    zstring.erase_range(2..).unwrap();
    assert_eq!(zstring, "ad");

    assert!(zstring.erase_range(1..4).is_err());
    assert!(zstring.erase_range(3..).is_err());
}

#[test]
fn prefix_and_suffix_probes() {
    let zstring = ZString::from("hello");

    assert!(zstring.starts_with("hel"));
    assert!(zstring.starts_with(""));
    assert!(!zstring.starts_with("hello there"));
    assert!(zstring.starts_with_byte(b'h'));

    assert!(zstring.ends_with("llo"));
    assert!(zstring.ends_with(""));
    assert!(!zstring.ends_with("say hello"));
    assert!(zstring.ends_with_byte(b'o'));

    let empty = ZString::new();
    assert!(!empty.starts_with_byte(b'h'));
    assert!(!empty.ends_with_byte(b'o'));
}

#[test]
fn move_leaves_the_source_empty() {
    let mut zstring = ZString::from("contents");

    let moved = std::mem::take(&mut zstring);

    assert_eq!(moved, "contents");
    assert!(zstring.is_empty());
    assert_eq!(zstring.as_bytes_with_nul(), b"\0");
}

#[test]
fn split_sides() {
    let zstring = ZString::from("hello world");

    assert_eq!(zstring.split(b' ', 0, SplitSide::Left), b"hello");
    assert_eq!(zstring.split(b' ', 0, SplitSide::Right), b"world");

    // no match: the left side is everything scanned, the right side nothing
    assert_eq!(zstring.split(b'!', 0, SplitSide::Left), b"hello world");
    assert_eq!(zstring.split(b'!', 0, SplitSide::Right), b"");

    // an offset past the end yields an empty view
    assert_eq!(zstring.split(b' ', 11, SplitSide::Left), b"");
}

#[test]
fn rsplit_sides() {
    let zstring = ZString::from("a.b.c");

    assert_eq!(zstring.rsplit(b'.', 0, SplitSide::Right), b"c");
    assert_eq!(zstring.rsplit(b'.', 0, SplitSide::Left), b"a.b");

    // skipping the last segment finds the earlier delimiter
    assert_eq!(zstring.rsplit(b'.', 2, SplitSide::Left), b"a");

    assert_eq!(zstring.rsplit(b'!', 0, SplitSide::Left), b"");
    assert_eq!(zstring.rsplit(b'!', 0, SplitSide::Right), b"a.b.c");
}

#[test]
fn split_into_owned_containers() {
    let zstring = ZString::from("a,b,,c,");

    let segments: Vec<ZString> = zstring.split_into(b',', 0);
    assert_eq!(
        segments,
        [
            ZString::from("a"),
            ZString::from("b"),
            ZString::from(""),
            ZString::from("c"),
        ]
    );

    let raw: Vec<Vec<u8>> = zstring.split_into(b',', 2);
    assert_eq!(raw, [b"b".to_vec(), b"".to_vec(), b"c".to_vec()]);
}

#[test]
fn case_conversion_is_ascii_only() {
    let mut zstring = ZString::from("Grüße 123");

    assert_eq!(zstring.to_uppercase(), "GRüßE 123".as_bytes());
    assert_eq!(zstring.to_lowercase(), "grüße 123".as_bytes());

    zstring.make_uppercase();
    assert_eq!(zstring, "GRüßE 123".as_bytes());
}

#[test]
fn parse_or_default_swallows_failures() {
    assert_eq!(ZString::from("42").parse_or_default::<i32>(), 42);
    assert_eq!(ZString::from("4x2").parse_or_default::<i32>(), 0);
    assert_eq!(ZString::from("").parse_or_default::<u64>(), 0);
    assert_eq!(ZString::from("2.5").parse_or_default::<f64>(), 2.5);
    assert_eq!(ZString::from(b"\xFF\xFE").parse_or_default::<i32>(), 0);
}

#[test]
fn display_and_debug() {
    let zstring = ZString::from("hello");
    assert_eq!(format!("{}", zstring), "hello");
    assert_eq!(format!("{:?}", zstring), "\"hello\"");

    let binary = ZString::from(b"a\xFFb\0c");
    assert_eq!(format!("{}", binary), "a\u{FFFD}b\0c");
    assert_eq!(format!("{:?}", binary), "\"a\\xffb\\x00c\"");
}

#[test]
fn equality_across_types() {
    let zstring = ZString::from("abc");

    assert_eq!(zstring, "abc");
    assert_eq!("abc", zstring);
    assert_eq!(zstring, String::from("abc"));
    assert_eq!(String::from("abc"), zstring);
    assert_eq!(zstring, b"abc");
    assert_eq!(zstring, b"abc".as_slice());
    assert_eq!(b"abc".as_slice(), zstring);
    assert_eq!(zstring, b"abc".to_vec());
    assert_eq!(b"abc".to_vec(), zstring);
}

#[test]
fn concatenation_operators() {
    let mut zstring = ZString::from("ab") + b"cd".as_slice();
    zstring += b"ef".as_slice();

    assert_eq!(zstring, "abcdef");
    assert_eq!(zstring.as_bytes_with_nul(), b"abcdef\0");
}

#[test]
fn writes_through_fmt() {
    use core::fmt::Write;

    let mut zstring = ZString::new();
    write!(&mut zstring, "{}-{}", 12, "ab").unwrap();

    assert_eq!(zstring, "12-ab");
}

#[test]
fn into_bytes_keeps_the_contents() {
    let zstring = ZString::from(b"ab\0cd");
    let bytes = zstring.into_bytes();

    assert_eq!(bytes, b"ab\0cd");
    assert!(bytes.capacity() > bytes.len());
}

#[test]
fn string_conversions() {
    let zstring = ZString::from("text");
    assert_eq!(zstring.to_str(), Ok("text"));
    assert_eq!(String::try_from(zstring), Ok(String::from("text")));

    let binary = ZString::from(b"a\xFF");
    assert!(binary.to_str().is_err());
    assert_eq!(binary.to_str_lossy(), "a\u{FFFD}");
    assert!(String::try_from(binary).is_err());
}

#[cfg(unix)]
#[test]
fn unix_path_views() {
    use std::path::Path;

    let zstring = ZString::from("/usr/local/bin");

    assert_eq!(zstring.as_path(), Path::new("/usr/local/bin"));
    assert_eq!(zstring.as_path().file_name().unwrap(), "bin");
}
