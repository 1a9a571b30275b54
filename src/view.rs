//! Search, case, reversal, and split algorithms over borrowed byte views.
//!
//! Everything here operates on plain `&[u8]`/`&mut [u8]` slices, so callers
//! that already hold a view don't need to construct a [`ZString`] first. The
//! methods on [`ZString`] delegate to these functions, which keeps the two
//! layers in agreement by construction.
//!
//! [`ZString`]: crate::ZString

/// Which side of a delimiter match [`split`] and [`rsplit`] return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitSide {
    /// The segment before the delimiter.
    Left,
    /// The segment after the delimiter.
    Right,
}

/// Returns `true` if `haystack` contains `needle` as a contiguous
/// subsequence.
///
/// An empty needle is considered contained in every haystack, including an
/// empty one. The scan is the naive O(n·m) one with a first-byte
/// short-circuit; needles longer than the haystack are never found.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    // Note: empty strings are still considered substrings of any string
    if needle.is_empty() {
        return true;
    }

    let difference = haystack.len() - needle.len();
    for i in 0..=difference {
        if haystack[i] == needle[0] && &haystack[i..i + needle.len()] == needle {
            return true;
        }
    }

    false
}

/// Returns `true` if `haystack` contains `byte`.
pub fn contains_byte(haystack: &[u8], byte: u8) -> bool {
    haystack.iter().any(|&b| b == byte)
}

/// Returns `true` if `haystack` begins with `needle`. An over-length needle
/// is simply not a prefix.
pub fn starts_with(haystack: &[u8], needle: &[u8]) -> bool {
    needle.len() <= haystack.len() && &haystack[..needle.len()] == needle
}

/// Returns `true` if `haystack` ends with `needle`. An over-length needle is
/// simply not a suffix.
pub fn ends_with(haystack: &[u8], needle: &[u8]) -> bool {
    needle.len() <= haystack.len() && &haystack[haystack.len() - needle.len()..] == needle
}

/// Scans forward from `offset` for the first `delim` and returns one side of
/// the match as a view into `view`.
///
/// * `SplitSide::Left`: the segment `[offset, match)`; when no delimiter is
///   found, the whole tail from `offset`.
/// * `SplitSide::Right`: the segment after the match to the end; empty when
///   the delimiter is the last byte or absent.
///
/// An `offset` at or past the end yields an empty view.
pub fn split(view: &[u8], delim: u8, offset: usize, side: SplitSide) -> &[u8] {
    // Note: this also serves as an is-empty check
    if offset >= view.len() {
        return &[];
    }

    for i in offset..view.len() {
        if view[i] == delim {
            return match side {
                SplitSide::Left => &view[offset..i],
                SplitSide::Right => {
                    if i + 1 < view.len() {
                        &view[i + 1..]
                    } else {
                        &[]
                    }
                }
            };
        }
    }

    match side {
        SplitSide::Left => &view[offset..],
        // Hit the end, nothing to return on the right
        SplitSide::Right => &[],
    }
}

/// Scans backward from `view.len() - roffset` for the first `delim`,
/// conceptually splitting off the suffix first.
///
/// * `SplitSide::Right`: the segment `[match + 1, len - roffset)`; empty when
///   the match is the final byte. When no delimiter is found at all, the
///   whole prefix `[0, len - roffset)`.
/// * `SplitSide::Left`: the segment `[0, match)`; empty when the match is at
///   position 0 or the delimiter is never found.
///
/// An `roffset` at or past the end yields an empty view.
pub fn rsplit(view: &[u8], delim: u8, roffset: usize, side: SplitSide) -> &[u8] {
    // Note: this also serves as an is-empty check
    if roffset >= view.len() {
        return &[];
    }

    let end = view.len() - roffset;
    for i in (0..end).rev() {
        if view[i] == delim {
            return match side {
                SplitSide::Left => {
                    if i > 0 {
                        &view[..i]
                    } else {
                        &[]
                    }
                }
                SplitSide::Right => {
                    if i + 1 == view.len() {
                        &[]
                    } else {
                        &view[i + 1..end]
                    }
                }
            };
        }
    }

    match side {
        // Hit the front, nothing to return on the left
        SplitSide::Left => &[],
        SplitSide::Right => &view[..end],
    }
}

/// Splits `view` at every `delim` from `offset` onward, returning one view
/// per segment.
///
/// Empty segments between consecutive delimiters are kept, and so are
/// leading ones, but a single trailing delimiter at the very end produces no
/// trailing empty segment. Joining the segments with the delimiter therefore
/// reconstructs the suffix from `offset`, minus at most one trailing
/// delimiter. An `offset` at or past the end produces no segments.
pub fn split_views(view: &[u8], delim: u8, offset: usize) -> Vec<&[u8]> {
    // Note: this also serves as an is-empty check
    if offset >= view.len() {
        return Vec::new();
    }

    let mut views = Vec::new();
    let mut last_split = offset;

    for i in offset..view.len() {
        if view[i] == delim {
            views.push(&view[last_split..i]);
            last_split = i + 1;
        }
    }

    if last_split < view.len() {
        views.push(&view[last_split..]);
    }

    views
}

/// Returns a copy of `view` with ASCII letters lowercased. Bytes outside the
/// ASCII range are left untouched.
pub fn to_lowercase(view: &[u8]) -> Vec<u8> {
    view.to_ascii_lowercase()
}

/// Returns a copy of `view` with ASCII letters uppercased. Bytes outside the
/// ASCII range are left untouched.
pub fn to_uppercase(view: &[u8]) -> Vec<u8> {
    view.to_ascii_uppercase()
}

/// Lowercases ASCII letters in place.
pub fn make_lowercase(bytes: &mut [u8]) {
    bytes.make_ascii_lowercase();
}

/// Uppercases ASCII letters in place.
pub fn make_uppercase(bytes: &mut [u8]) {
    bytes.make_ascii_uppercase();
}

/// Returns a byte-order-reversed copy of `view`.
pub fn reversed(view: &[u8]) -> Vec<u8> {
    view.iter().rev().copied().collect()
}

/// Reverses `bytes` in place by swapping from both ends.
///
/// The loop bound is parity adjusted so the scan stops one step after the
/// two positions become adjacent; for odd lengths the center byte is never
/// revisited.
pub fn reverse(bytes: &mut [u8]) {
    if bytes.len() > 1 {
        let parity = bytes.len() % 2;

        for i in 0..bytes.len() {
            let back_index = bytes.len() - i - 1;
            bytes.swap(i, back_index);

            if i + 1 == back_index - parity {
                break;
            }
        }
    }
}
