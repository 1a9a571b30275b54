use core::fmt::{
    self,
    Write,
};

use castaway::{
    match_type,
    LifetimeFree,
};

use crate::utility::Sink;
use crate::ZString;

/// A trait for converting a value into a [`ZString`].
///
/// Automatically implemented for any type which implements [`Display`], so
/// it shouldn't be implemented directly: implement [`Display`] instead and
/// the `ToZString` implementation comes for free.
///
/// Integer and float conversions skip the formatting machinery entirely and
/// go through `itoa`/`ryu` into an exactly sized buffer.
///
/// [`Display`]: fmt::Display
pub trait ToZString {
    /// Converts the given value into a [`ZString`].
    ///
    /// # Examples
    ///
    /// ```
    /// use zbstring::ToZString;
    ///
    /// let five = 5.to_zstring();
    ///
    /// assert_eq!(five, "5");
    /// assert_eq!(five.parse::<i32>(), Some(5));
    /// ```
    fn to_zstring(&self) -> ZString;
}

// SAFETY: `ZString` owns its bytes outright and contains no lifetimes.
unsafe impl LifetimeFree for ZString {}

/// # Panics
///
/// Panics if the `Display` implementation returns an error, which indicates
/// an incorrect `Display` implementation: writing into a byte buffer never
/// errors itself.
impl<T: fmt::Display> ToZString for T {
    fn to_zstring(&self) -> ZString {
        match_type!(self, {
            &u8 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &i8 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &u16 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &i16 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &u32 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &i32 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &u64 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &i64 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &u128 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &i128 as n => ZString::from(itoa::Buffer::new().format(*n)),
            &usize as n => ZString::from(itoa::Buffer::new().format(*n)),
            &isize as n => ZString::from(itoa::Buffer::new().format(*n)),
            &f32 as n => ZString::from(ryu::Buffer::new().format(*n)),
            &f64 as n => ZString::from(ryu::Buffer::new().format(*n)),
            &bool as b => ZString::from(if *b { "true" } else { "false" }),
            &char as c => ZString::from(c.encode_utf8(&mut [0; 4]).as_bytes()),
            &String as s => ZString::from(s.as_str()),
            &ZString as z => z.clone(),
            value => {
                let count = Sink::count(value);
                let mut zstring = ZString::with_capacity(count);

                write!(&mut zstring, "{}", value).expect("fmt::Display incorrectly implemented");

                zstring
            }
        })
    }
}

/// Conveniences for gluing collections of byte sequences back together into
/// a single [`ZString`].
///
/// Implemented for slices of byte-sequence items, so it is available on
/// `Vec<ZString>`, `&[&[u8]]`, and `[&str; N]` receivers alike.
pub trait ZStringExt {
    /// Concatenates the items without any separator.
    fn concat_zstring(&self) -> ZString;

    /// Joins the items with `separator` between each pair.
    ///
    /// This is the inverse of [`ZString::split_into`] up to the trailing
    /// delimiter that a container split never reports.
    fn join_zstring(&self, separator: impl AsRef<[u8]>) -> ZString;
}

impl<B: AsRef<[u8]>> ZStringExt for [B] {
    fn concat_zstring(&self) -> ZString {
        let mut zstring = ZString::new();
        for item in self {
            zstring.push_bytes(item.as_ref());
        }
        zstring
    }

    fn join_zstring(&self, separator: impl AsRef<[u8]>) -> ZString {
        let separator = separator.as_ref();
        let mut zstring = ZString::new();

        let mut items = self.iter();
        if let Some(first) = items.next() {
            zstring.push_bytes(first.as_ref());
            for item in items {
                zstring.push_bytes(separator);
                zstring.push_bytes(item.as_ref());
            }
        }

        zstring
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ToZString,
        ZStringExt,
    };
    use crate::ZString;

    #[test]
    fn integers_take_the_fast_path() {
        assert_eq!(0u8.to_zstring(), "0");
        assert_eq!((-42i32).to_zstring(), "-42");
        assert_eq!(u64::MAX.to_zstring(), u64::MAX.to_string());
        assert_eq!(i128::MIN.to_zstring(), i128::MIN.to_string());
    }

    #[test]
    fn floats_roundtrip() {
        assert_eq!(1.5f64.to_zstring().parse::<f64>(), Some(1.5));
        assert_eq!(f32::MIN_POSITIVE.to_zstring().parse::<f32>(), Some(f32::MIN_POSITIVE));
    }

    #[test]
    fn strings_bools_chars() {
        assert_eq!(true.to_zstring(), "true");
        assert_eq!('ü'.to_zstring(), "ü".as_bytes());
        assert_eq!(String::from("owned").to_zstring(), "owned");
        assert_eq!(ZString::from("zstr").to_zstring(), "zstr");
    }

    #[test]
    fn display_fallback() {
        struct Celsius(i32);

        impl core::fmt::Display for Celsius {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}°C", self.0)
            }
        }

        let formatted = Celsius(21).to_zstring();
        assert_eq!(formatted, "21°C");
        assert_eq!(formatted.capacity(), formatted.len());
    }

    #[test]
    fn concat_and_join() {
        let parts = [b"a".as_slice(), b"b", b"c"];
        assert_eq!(parts.concat_zstring(), "abc");
        assert_eq!(parts.join_zstring(b", "), "a, b, c");

        let empty: [&[u8]; 0] = [];
        assert_eq!(empty.join_zstring(b","), "");

        let owned = vec![ZString::from("x"), ZString::from("y")];
        assert_eq!(owned.join_zstring(b"-"), "x-y");
    }

    // arrays, vectors, and plain slices all reach the `[B]` impl
    #[test]
    fn join_resolves_on_every_receiver_shape() {
        let array = ["a", "b"];
        assert_eq!(array.join_zstring(b","), "a,b");

        let slice: &[&str] = &array;
        assert_eq!(slice.join_zstring(b","), "a,b");

        let vector = vec![b"a".to_vec(), b"b".to_vec()];
        assert_eq!(vector.join_zstring(b","), "a,b");
        assert_eq!(vector.concat_zstring(), "ab");
    }
}
