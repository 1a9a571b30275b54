#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt;
use core::hash::{
    Hash,
    Hasher,
};
use core::ops::{
    Add,
    AddAssign,
    Bound,
    Deref,
    DerefMut,
    Index,
    IndexMut,
    RangeBounds,
};
use core::slice::SliceIndex;
use core::str::{
    FromStr,
    Utf8Error,
};
use std::borrow::Cow;
use std::ffi::{
    CStr,
    FromBytesWithNulError,
};
use std::string::FromUtf8Error;

mod buffer;
mod iter;
mod macros;
mod utility;

pub mod view;

mod error;
pub use error::Error;

mod traits;
pub use traits::{
    ToZString,
    ZStringExt,
};

pub use iter::IntoIter;
pub use view::SplitSide;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

use buffer::HeapBuffer;

/// A growable, heap-allocated byte string that keeps a zero byte right after
/// its contents.
///
/// The terminator is bookkeeping, not content: it is rewritten after every
/// mutation, never counted by [`len`], and interior zero bytes are legal.
/// The buffer is always allocated, even when empty, so
/// [`as_bytes_with_nul`] can always hand a terminated sequence to C-style
/// consumers.
///
/// A `ZString` exclusively owns its allocation. There is no reference
/// counting and no inline representation; cloning deep-copies, and moving
/// transfers the buffer. Searching and splitting return `&[u8]` views into
/// the buffer whose lifetimes are tied to the value, so a view can neither
/// outlive the string nor survive a mutation of it.
///
/// ## Using `ZString`
/// ```
/// use zbstring::ZString;
/// # use std::collections::HashMap;
///
/// // ZString derefs to a byte slice, so the whole `[u8]` API applies
/// if ZString::from("hello world").is_ascii() {
///     println!("all ASCII");
/// }
///
/// // usable as a map key, and looked up by any byte view
/// let mut map: HashMap<ZString, u32> = HashMap::new();
/// map.insert(ZString::from("nyc"), 8);
/// assert_eq!(map.get(b"nyc".as_slice()), Some(&8));
///
/// // comparable against owned strings, views, and raw byte sequences alike
/// assert_eq!(ZString::from("chicago"), "chicago");
/// assert_eq!(ZString::from("houston"), b"houston".as_slice());
/// ```
///
/// [`len`]: ZString::len
/// [`as_bytes_with_nul`]: ZString::as_bytes_with_nul
pub struct ZString {
    buf: HeapBuffer,
}

impl ZString {
    /// The maximum number of content bytes a `ZString` can hold, leaving
    /// room for the terminator within the largest possible allocation.
    pub const MAX_LENGTH: usize = buffer::MAX_LENGTH;

    /// Creates a new empty `ZString`.
    ///
    /// Even an empty string holds a one byte allocation containing only the
    /// terminator.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::new();
    ///
    /// assert!(zstring.is_empty());
    /// assert_eq!(zstring.as_bytes_with_nul(), b"\0");
    /// ```
    #[inline]
    pub fn new() -> Self {
        ZString {
            buf: HeapBuffer::new(),
        }
    }

    /// Creates a new empty `ZString` with room for at least `capacity`
    /// content bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        ZString {
            buf: HeapBuffer::with_capacity(capacity),
        }
    }

    /// Creates a `ZString` holding `count` copies of `byte`.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let ruler = ZString::from_fill(4, b'-');
    ///
    /// assert_eq!(ruler, "----");
    /// ```
    #[inline]
    pub fn from_fill(count: usize, byte: u8) -> Self {
        ZString {
            buf: HeapBuffer::from_fill(count, byte),
        }
    }

    /// Returns the length in bytes, not counting the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the string holds no content bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of content bytes the current allocation can hold
    /// before the buffer has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Ensures the capacity is at least `additional` bytes beyond the
    /// current length. Growth is amortized, so the capacity may increase by
    /// more than requested.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional)
    }

    /// Returns the content bytes, without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Returns the content bytes with the terminator included as the final
    /// byte.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::from("abc");
    ///
    /// assert_eq!(zstring.as_bytes(), b"abc");
    /// assert_eq!(zstring.as_bytes_with_nul(), b"abc\0");
    /// ```
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.as_slice_with_nul()
    }

    /// Returns a mutable view of the content bytes. The terminator is not
    /// part of the slice, so no write through it can break the invariants.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    /// Returns a raw pointer to the first byte. The pointee sequence is
    /// terminated, making the pointer suitable for C-style consumers as long
    /// as the contents hold no interior zero bytes.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Returns the byte at `pos`, or [`Error::OutOfRange`] if `pos` is past
    /// the end.
    ///
    /// For panicking access use indexing; for `Option`-style access use
    /// [`get`](slice::get) through deref.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::from("abc");
    ///
    /// assert_eq!(zstring.at(1), Ok(b'b'));
    /// assert!(zstring.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, pos: usize) -> Result<u8, Error> {
        self.as_bytes().get(pos).copied().ok_or(Error::OutOfRange {
            index: pos,
            len: self.len(),
        })
    }

    /// Appends `byte` to the end.
    ///
    /// Equivalent to `resize(len() + 1, byte)`, and fallible for the same
    /// reason: the result may not exceed [`MAX_LENGTH`](Self::MAX_LENGTH).
    #[inline]
    pub fn push_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.resize(self.len() + 1, byte)
    }

    /// Removes and returns the last byte, or `None` if the string is empty.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("ab");
    ///
    /// assert_eq!(zstring.pop_byte(), Some(b'b'));
    /// assert_eq!(zstring.pop_byte(), Some(b'a'));
    /// assert_eq!(zstring.pop_byte(), None);
    /// ```
    #[inline]
    pub fn pop_byte(&mut self) -> Option<u8> {
        let last = *self.as_bytes().last()?;

        // SAFETY: the string is non-empty and we only shrink it
        unsafe { self.buf.set_len(self.len() - 1) };

        Some(last)
    }

    /// Appends a byte sequence to the end.
    ///
    /// Appending an empty sequence is a no-op and never allocates. Returns
    /// [`Error::TooLong`] if the result would exceed
    /// [`MAX_LENGTH`](Self::MAX_LENGTH).
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("abc");
    ///
    /// zstring.append("123")?;
    /// zstring.append(b"")?;
    ///
    /// assert_eq!(zstring, "abc123");
    /// # Ok::<(), zbstring::Error>(())
    /// ```
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), Error> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Ok(());
        }

        match self.len().checked_add(bytes.len()) {
            Some(new_len) if new_len <= Self::MAX_LENGTH => {
                self.buf.push_slice(bytes);
                Ok(())
            }
            _ => Err(Error::TooLong {
                requested: self.len().saturating_add(bytes.len()),
            }),
        }
    }

    /// Appends `count` copies of `byte`.
    pub fn append_fill(&mut self, count: usize, byte: u8) -> Result<(), Error> {
        match self.len().checked_add(count) {
            Some(new_len) => self.resize(new_len, byte),
            None => Err(Error::TooLong {
                requested: usize::MAX,
            }),
        }
    }

    /// Resizes the contents to exactly `new_len` bytes.
    ///
    /// Shrinking truncates in place and only rewrites the terminator;
    /// growing fills the new tail with `fill`. Returns [`Error::TooLong`]
    /// if `new_len` exceeds [`MAX_LENGTH`](Self::MAX_LENGTH).
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("ab");
    ///
    /// zstring.resize(4, b'!')?;
    /// assert_eq!(zstring, "ab!!");
    ///
    /// zstring.resize(1, b'?')?;
    /// assert_eq!(zstring, "a");
    /// # Ok::<(), zbstring::Error>(())
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: u8) -> Result<(), Error> {
        if new_len > Self::MAX_LENGTH {
            return Err(Error::TooLong {
                requested: new_len,
            });
        }

        if new_len <= self.len() {
            // SAFETY: we only shrink, the prefix stays initialized
            unsafe { self.buf.set_len(new_len) };
        } else {
            self.buf.fill_to(new_len, fill);
        }

        Ok(())
    }

    /// Shortens the contents to `new_len` bytes; a no-op when `new_len` is
    /// not smaller than the current length. The allocation is retained.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            // SAFETY: we only shrink, the prefix stays initialized
            unsafe { self.buf.set_len(new_len) };
        }
    }

    /// Removes `count` bytes starting at `index`, shifting the tail left.
    ///
    /// `count` is clamped to the remaining length, and `index == len()`
    /// removes zero bytes, so only `index > len()` is an error. The
    /// allocation is retained.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("hello world");
    ///
    /// zstring.erase(5, 6)?;
    /// assert_eq!(zstring, "hello");
    ///
    /// // erasing at the very end is defined as erasing nothing
    /// zstring.erase(5, 100)?;
    /// assert_eq!(zstring, "hello");
    ///
    /// assert!(zstring.erase(6, 1).is_err());
    /// # Ok::<(), zbstring::Error>(())
    /// ```
    pub fn erase(&mut self, index: usize, count: usize) -> Result<(), Error> {
        let len = self.len();
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }

        let count = count.min(len - index);
        if count == 0 {
            return Ok(());
        }

        self.as_mut_bytes().copy_within(index + count.., index);

        // SAFETY: we only shrink, the compacted prefix is initialized
        unsafe { self.buf.set_len(len - count) };

        Ok(())
    }

    /// Removes the given byte range, shifting the tail left.
    ///
    /// An empty range at the end is a no-op; a bound past the end or a
    /// start past the exclusive end is [`Error::OutOfRange`].
    pub fn erase_range(&mut self, range: impl RangeBounds<usize>) -> Result<(), Error> {
        let (start, end) = self.ensure_range(range)?;
        self.erase(start, end - start)
    }

    /// Resolves `range` into `start..end`, rejecting anything outside the
    /// contents.
    fn ensure_range(&self, range: impl RangeBounds<usize>) -> Result<(usize, usize), Error> {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n
                .checked_add(1)
                .ok_or(Error::OutOfRange { index: n, len })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n
                .checked_add(1)
                .ok_or(Error::OutOfRange { index: n, len })?,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };

        if end > len {
            return Err(Error::OutOfRange { index: end, len });
        }
        if start > end {
            return Err(Error::OutOfRange { index: start, len });
        }

        Ok((start, end))
    }

    /// Resets the string to empty, releasing the contents down to the one
    /// byte terminator-only allocation.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("some contents");
    ///
    /// zstring.clear();
    ///
    /// assert!(zstring.is_empty());
    /// assert_eq!(zstring.capacity(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.buf = HeapBuffer::new();
    }

    /// Lexicographically compares the contents against any byte view:
    /// byte-wise over the shared prefix, with the shorter sequence ordered
    /// first on a tie.
    #[inline]
    pub fn compare(&self, other: impl AsRef<[u8]>) -> Ordering {
        self.as_bytes().cmp(other.as_ref())
    }

    /// Returns `true` if the contents contain `needle` as a contiguous
    /// subsequence. An empty needle is contained in everything.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::from("hello world");
    ///
    /// assert!(zstring.contains("lo wo"));
    /// assert!(zstring.contains(""));
    /// assert!(!zstring.contains("world!"));
    /// ```
    #[inline]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        view::contains(self.as_bytes(), needle.as_ref())
    }

    /// Returns `true` if the contents contain `byte`.
    #[inline]
    pub fn contains_byte(&self, byte: u8) -> bool {
        view::contains_byte(self.as_bytes(), byte)
    }

    /// Returns `true` if the contents begin with `needle`. An over-length
    /// probe returns `false` rather than failing.
    #[inline]
    pub fn starts_with(&self, needle: impl AsRef<[u8]>) -> bool {
        view::starts_with(self.as_bytes(), needle.as_ref())
    }

    /// Returns `true` if the first byte is `byte`; `false` when empty.
    #[inline]
    pub fn starts_with_byte(&self, byte: u8) -> bool {
        self.as_bytes().first() == Some(&byte)
    }

    /// Returns `true` if the contents end with `needle`. An over-length
    /// probe returns `false` rather than failing.
    #[inline]
    pub fn ends_with(&self, needle: impl AsRef<[u8]>) -> bool {
        view::ends_with(self.as_bytes(), needle.as_ref())
    }

    /// Returns `true` if the last byte is `byte`; `false` when empty.
    #[inline]
    pub fn ends_with_byte(&self, byte: u8) -> bool {
        self.as_bytes().last() == Some(&byte)
    }

    /// Returns a copy with ASCII letters lowercased. Bytes outside the
    /// ASCII range are untouched.
    #[inline]
    pub fn to_lowercase(&self) -> ZString {
        ZString::from(view::to_lowercase(self.as_bytes()))
    }

    /// Returns a copy with ASCII letters uppercased. Bytes outside the
    /// ASCII range are untouched.
    #[inline]
    pub fn to_uppercase(&self) -> ZString {
        ZString::from(view::to_uppercase(self.as_bytes()))
    }

    /// Lowercases ASCII letters in place.
    #[inline]
    pub fn make_lowercase(&mut self) {
        view::make_lowercase(self.as_mut_bytes());
    }

    /// Uppercases ASCII letters in place.
    #[inline]
    pub fn make_uppercase(&mut self) {
        view::make_uppercase(self.as_mut_bytes());
    }

    /// Returns a byte-order-reversed copy.
    #[inline]
    pub fn reversed(&self) -> ZString {
        ZString::from(view::reversed(self.as_bytes()))
    }

    /// Reverses the byte order in place.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let mut zstring = ZString::from("abcde");
    ///
    /// zstring.reverse();
    /// assert_eq!(zstring, "edcba");
    /// ```
    #[inline]
    pub fn reverse(&mut self) {
        view::reverse(self.as_mut_bytes());
    }

    /// Scans forward from `offset` for the first `delim` and returns one
    /// side of the match as a view into this string.
    ///
    /// See [`view::split`] for the exact contract.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::{view::SplitSide, ZString};
    /// let zstring = ZString::from("hello world");
    ///
    /// assert_eq!(zstring.split(b' ', 0, SplitSide::Left), b"hello");
    /// assert_eq!(zstring.split(b' ', 0, SplitSide::Right), b"world");
    /// ```
    #[inline]
    pub fn split(&self, delim: u8, offset: usize, side: SplitSide) -> &[u8] {
        view::split(self.as_bytes(), delim, offset, side)
    }

    /// Scans backward from `len() - roffset` for the first `delim` and
    /// returns one side of the match as a view into this string.
    ///
    /// See [`view::rsplit`] for the exact contract.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::{view::SplitSide, ZString};
    /// let zstring = ZString::from("a.b.c");
    ///
    /// assert_eq!(zstring.rsplit(b'.', 0, SplitSide::Right), b"c");
    /// assert_eq!(zstring.rsplit(b'.', 0, SplitSide::Left), b"a.b");
    /// ```
    #[inline]
    pub fn rsplit(&self, delim: u8, roffset: usize, side: SplitSide) -> &[u8] {
        view::rsplit(self.as_bytes(), delim, roffset, side)
    }

    /// Splits at every `delim` from `offset` onward, returning views into
    /// this string without copying.
    ///
    /// Empty segments between consecutive delimiters are kept; a single
    /// trailing delimiter produces no trailing empty segment. See
    /// [`view::split_views`].
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let csv = ZString::from("a,b,,c");
    /// assert_eq!(csv.split_views(b',', 0), [b"a".as_slice(), b"b", b"", b"c"]);
    ///
    /// let trailing = ZString::from("a,b,c,");
    /// assert_eq!(trailing.split_views(b',', 0), [b"a".as_slice(), b"b", b"c"]);
    /// ```
    #[inline]
    pub fn split_views(&self, delim: u8, offset: usize) -> Vec<&[u8]> {
        view::split_views(self.as_bytes(), delim, offset)
    }

    /// Like [`split_views`](Self::split_views), but copies each segment into
    /// an owned container element.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::from("a,b,c");
    ///
    /// let segments: Vec<ZString> = zstring.split_into(b',', 0);
    /// assert_eq!(segments, [ZString::from("a"), ZString::from("b"), ZString::from("c")]);
    ///
    /// let raw: Vec<Vec<u8>> = zstring.split_into(b',', 0);
    /// assert_eq!(raw, [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    /// ```
    pub fn split_into<T>(&self, delim: u8, offset: usize) -> Vec<T>
    where
        T: for<'a> From<&'a [u8]>,
    {
        self.split_views(delim, offset)
            .into_iter()
            .map(T::from)
            .collect()
    }

    /// Parses the contents as a `T`, returning `None` when the bytes are
    /// not valid UTF-8 or not a valid textual representation of `T`.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// assert_eq!(ZString::from("12345").parse::<i32>(), Some(12345));
    /// assert_eq!(ZString::from("12x45").parse::<i32>(), None);
    /// ```
    #[inline]
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        core::str::from_utf8(self.as_bytes())
            .ok()
            .and_then(|s| s.parse().ok())
    }

    /// Parses the contents as a `T`, falling back to `T::default()` (zero
    /// for the numeric types) when the contents are malformed or empty.
    ///
    /// The silent fallback mirrors C-style numeric conversion; prefer
    /// [`parse`](Self::parse) when the failure matters.
    #[inline]
    pub fn parse_or_default<T: FromStr + Default>(&self) -> T {
        self.parse().unwrap_or_default()
    }

    /// Yields the contents as `&str` if they are valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Converts the contents to a string, mapping invalid UTF-8 ranges to
    /// U+FFFD. Borrows when the contents are already valid.
    #[inline]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Views the terminated contents as a `&CStr`. Fails when the contents
    /// hold an interior zero byte.
    ///
    /// # Examples
    /// ```
    /// # use zbstring::ZString;
    /// let zstring = ZString::from("abc");
    /// assert_eq!(zstring.as_c_str().unwrap().to_bytes(), b"abc");
    ///
    /// let interior_nul = ZString::from(b"ab\0cd");
    /// assert!(interior_nul.as_c_str().is_err());
    /// ```
    #[inline]
    pub fn as_c_str(&self) -> Result<&CStr, FromBytesWithNulError> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul())
    }

    /// Transfers the contents into a `Vec<u8>` without copying. The
    /// terminator byte becomes spare capacity.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_vec()
    }

    /// Infallible internal append, used by the trait surface (`Extend`,
    /// `fmt::Write`, `Add`) where an error cannot be reported.
    #[inline]
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.push_slice(bytes);
    }
}

impl Default for ZString {
    #[inline]
    fn default() -> Self {
        ZString::new()
    }
}

impl Clone for ZString {
    /// Deep-copies into an exact-size allocation.
    fn clone(&self) -> Self {
        ZString {
            buf: self.buf.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
    }
}

impl Deref for ZString {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for ZString {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }
}

impl AsRef<[u8]> for ZString {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for ZString {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for ZString {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_bytes()[index]
    }
}

impl<I: SliceIndex<[u8]>> IndexMut<I> for ZString {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_bytes()[index]
    }
}

impl Eq for ZString {}

impl<T: AsRef<[u8]>> PartialEq<T> for ZString {
    fn eq(&self, other: &T) -> bool {
        self.as_bytes() == other.as_ref()
    }
}

impl PartialEq<ZString> for [u8] {
    fn eq(&self, other: &ZString) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<ZString> for &[u8] {
    fn eq(&self, other: &ZString) -> bool {
        *self == other.as_bytes()
    }
}

impl PartialEq<ZString> for str {
    fn eq(&self, other: &ZString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ZString> for &str {
    fn eq(&self, other: &ZString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ZString> for String {
    fn eq(&self, other: &ZString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<ZString> for Vec<u8> {
    fn eq(&self, other: &ZString) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl Ord for ZString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for ZString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ZString {
    /// Hashes the borrowed byte view, so equal values hash equally and maps
    /// keyed by `ZString` can be queried with any `&[u8]`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl From<&[u8]> for ZString {
    fn from(bytes: &[u8]) -> Self {
        ZString {
            buf: HeapBuffer::from_slice(bytes),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for ZString {
    fn from(bytes: &[u8; N]) -> Self {
        ZString::from(bytes.as_slice())
    }
}

impl From<&str> for ZString {
    fn from(s: &str) -> Self {
        ZString::from(s.as_bytes())
    }
}

impl From<String> for ZString {
    fn from(s: String) -> Self {
        ZString::from(s.as_bytes())
    }
}

impl From<Vec<u8>> for ZString {
    fn from(bytes: Vec<u8>) -> Self {
        ZString::from(bytes.as_slice())
    }
}

impl<'a> From<Cow<'a, [u8]>> for ZString {
    fn from(cow: Cow<'a, [u8]>) -> Self {
        match cow {
            Cow::Borrowed(bytes) => bytes.into(),
            Cow::Owned(bytes) => bytes.into(),
        }
    }
}

impl From<ZString> for Vec<u8> {
    fn from(zstring: ZString) -> Self {
        zstring.into_bytes()
    }
}

impl TryFrom<ZString> for String {
    type Error = FromUtf8Error;

    fn try_from(zstring: ZString) -> Result<String, FromUtf8Error> {
        String::from_utf8(zstring.into_bytes())
    }
}

impl FromStr for ZString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<ZString, Self::Err> {
        Ok(ZString::from(s))
    }
}

impl fmt::Debug for ZString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for ZString {
    /// Writes the byte contents as-is, rendering invalid UTF-8 ranges as
    /// U+FFFD. No quoting or escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Write for ZString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }

    fn write_fmt(mut self: &mut Self, args: fmt::Arguments<'_>) -> fmt::Result {
        match args.as_str() {
            Some(s) => {
                self.push_bytes(s.as_bytes());
                Ok(())
            }
            None => fmt::write(&mut self, args),
        }
    }
}

impl Add<&[u8]> for ZString {
    type Output = Self;

    fn add(mut self, rhs: &[u8]) -> Self::Output {
        self.push_bytes(rhs);
        self
    }
}

impl AddAssign<&[u8]> for ZString {
    fn add_assign(&mut self, rhs: &[u8]) {
        self.push_bytes(rhs);
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::path::Path;

        impl ZString {
            /// Views the contents as an `OsStr`. Unix only, where `OsStr` is
            /// arbitrary bytes.
            #[inline]
            pub fn as_os_str(&self) -> &OsStr {
                OsStr::from_bytes(self.as_bytes())
            }

            /// Views the contents as a filesystem path. Unix only.
            #[inline]
            pub fn as_path(&self) -> &Path {
                Path::new(self.as_os_str())
            }
        }

        impl AsRef<OsStr> for ZString {
            #[inline]
            fn as_ref(&self) -> &OsStr {
                self.as_os_str()
            }
        }

        impl AsRef<Path> for ZString {
            #[inline]
            fn as_ref(&self) -> &Path {
                self.as_path()
            }
        }
    }
}

// one pointer plus two lengths, same as a Vec, with a niche for Option
static_assertions::assert_eq_size!(ZString, Vec<u8>);
static_assertions::assert_eq_size!(ZString, Option<ZString>);
