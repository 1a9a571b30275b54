//! Iterator plumbing: an owned byte iterator plus the `FromIterator` and
//! `Extend` impls that make building a [`ZString`] easier.

use core::iter::FusedIterator;

use crate::ZString;

/// An owned, double-ended iterator over the bytes of a [`ZString`], created
/// by [`ZString::into_iter`].
///
/// [`ZString::into_iter`]: IntoIterator::into_iter
#[derive(Debug, Clone)]
pub struct IntoIter {
    bytes: std::vec::IntoIter<u8>,
}

impl Iterator for IntoIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.bytes.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.bytes.count()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.bytes.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for ZString {
    type Item = u8;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            bytes: self.into_bytes().into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a ZString {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

impl<'a> IntoIterator for &'a mut ZString {
    type Item = &'a mut u8;
    type IntoIter = core::slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_bytes().iter_mut()
    }
}

impl FromIterator<u8> for ZString {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let iter = iter.into_iter();

        let (size_hint, _) = iter.size_hint();
        let mut zstring = ZString::with_capacity(size_hint);
        zstring.extend(iter);

        zstring
    }
}

impl<'a> FromIterator<&'a u8> for ZString {
    fn from_iter<T: IntoIterator<Item = &'a u8>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a [u8]> for ZString {
    fn from_iter<T: IntoIterator<Item = &'a [u8]>>(iter: T) -> Self {
        let mut zstring = ZString::new();
        zstring.extend(iter);
        zstring
    }
}

impl Extend<u8> for ZString {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        let iter = iter.into_iter();

        let (size_hint, _) = iter.size_hint();
        self.reserve(size_hint);

        for byte in iter {
            self.push_bytes(&[byte]);
        }
    }
}

impl<'a> Extend<&'a u8> for ZString {
    fn extend<T: IntoIterator<Item = &'a u8>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied())
    }
}

impl<'a> Extend<&'a [u8]> for ZString {
    fn extend<T: IntoIterator<Item = &'a [u8]>>(&mut self, iter: T) {
        for bytes in iter {
            self.push_bytes(bytes);
        }
    }
}
