use core::cmp;
use core::mem::ManuallyDrop;
use core::ptr::{
    self,
    NonNull,
};
use core::slice;
use std::alloc;

/// The maximum number of content bytes a buffer can hold, leaving room for
/// the terminator within the largest allocation the global allocator permits.
pub(crate) const MAX_LENGTH: usize = isize::MAX as usize - 1;

/// An exclusively owned heap allocation of `cap + 1` bytes.
///
/// Invariants:
/// * the allocation always exists, even when empty (a single terminator byte)
/// * the byte at index `len` is always `0`
/// * `len <= cap <= MAX_LENGTH`
pub(crate) struct HeapBuffer {
    ptr: NonNull<u8>,
    len: usize,
    cap: usize,
}

// SAFETY: `HeapBuffer` exclusively owns its allocation.
unsafe impl Send for HeapBuffer {}
unsafe impl Sync for HeapBuffer {}

impl HeapBuffer {
    /// An empty buffer: a one byte allocation holding only the terminator.
    #[inline]
    pub fn new() -> Self {
        HeapBuffer::with_capacity(0)
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        let ptr = alloc_buffer(cap);

        // SAFETY: the allocation holds `cap + 1` bytes, so index 0 is in bounds
        unsafe { ptr.as_ptr().write(0) };

        HeapBuffer { ptr, len: 0, cap }
    }

    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = HeapBuffer::with_capacity(bytes.len());

        // SAFETY: the new allocation holds `bytes.len() + 1` bytes and cannot
        // overlap `bytes`, and after the copy the first `len` bytes are
        // initialized
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.ptr.as_ptr(), bytes.len());
            buffer.set_len(bytes.len());
        }

        buffer
    }

    #[inline]
    pub fn from_fill(count: usize, byte: u8) -> Self {
        let mut buffer = HeapBuffer::with_capacity(count);

        // SAFETY: the allocation holds `count + 1` bytes, and the fill
        // initializes the first `count` of them
        unsafe {
            ptr::write_bytes(buffer.ptr.as_ptr(), byte, count);
            buffer.set_len(count);
        }

        buffer
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Sets the logical length and rewrites the terminator byte.
    ///
    /// # Safety
    /// * `new_len` must be `<= capacity()`
    /// * the bytes at `..new_len` must be initialized
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.cap);

        self.len = new_len;
        self.ptr.as_ptr().add(new_len).write(0);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: the first `len` bytes are always initialized
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The contents plus the terminator byte.
    #[inline]
    pub fn as_slice_with_nul(&self) -> &[u8] {
        // SAFETY: `len + 1 <= cap + 1`, and the byte at `len` is the terminator
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len + 1) }
    }

    /// A mutable view of the content bytes. The terminator stays out of
    /// reach, so no mutation through this slice can break the invariants.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: the first `len` bytes are always initialized
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Ensures room for at least `additional` more content bytes, growing
    /// with the usual amortization so repeated pushes stay linear.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).expect("capacity overflow");
        if required <= self.cap {
            return;
        }

        let amortized = (self.cap / 2).saturating_add(self.cap);
        self.grow(cmp::max(amortized, required));
    }

    fn grow(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let new_ptr = alloc_buffer(new_cap);

        // SAFETY: both allocations hold at least `len + 1` bytes, the new one
        // is fresh so the regions cannot overlap, and the old pointer came
        // from `alloc_buffer` with capacity `self.cap`
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            new_ptr.as_ptr().add(self.len).write(0);
            dealloc_buffer(self.ptr, self.cap);
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Appends `bytes` after the current contents.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        self.reserve(bytes.len());

        // SAFETY: `reserve` made room for `len + bytes.len()` content bytes,
        // and `bytes` cannot overlap our exclusively owned allocation
        unsafe {
            ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                self.ptr.as_ptr().add(self.len),
                bytes.len(),
            );
            self.set_len(self.len + bytes.len());
        }
    }

    /// Grows the contents to `new_len`, filling the tail with `byte`.
    pub fn fill_to(&mut self, new_len: usize, byte: u8) {
        debug_assert!(new_len >= self.len);

        self.reserve(new_len - self.len);

        // SAFETY: `reserve` made room for `new_len` content bytes, and the
        // fill initializes everything between the old and new lengths
        unsafe {
            ptr::write_bytes(self.ptr.as_ptr().add(self.len), byte, new_len - self.len);
            self.set_len(new_len);
        }
    }

    /// Transfers the allocation into a `Vec<u8>` without copying. The
    /// terminator byte becomes spare capacity.
    pub fn into_vec(self) -> Vec<u8> {
        let buffer = ManuallyDrop::new(self);

        // SAFETY: the allocation came from the global allocator with the
        // layout of `cap + 1` `u8`s, which is exactly the layout `Vec` will
        // use to free a vector with that capacity
        unsafe { Vec::from_raw_parts(buffer.ptr.as_ptr(), buffer.len, buffer.cap + 1) }
    }
}

impl Clone for HeapBuffer {
    /// Deep copies into an exact-size allocation, dropping any spare capacity.
    fn clone(&self) -> Self {
        HeapBuffer::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        *self = HeapBuffer::from_slice(source.as_slice());
    }
}

impl Drop for HeapBuffer {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `alloc_buffer` with capacity `cap`, and is
        // released exactly once because we own it exclusively
        unsafe { dealloc_buffer(self.ptr, self.cap) }
    }
}

fn alloc_buffer(cap: usize) -> NonNull<u8> {
    let layout = buffer_layout(cap);
    debug_assert!(layout.size() > 0);

    // SAFETY: the layout is never zero sized, the terminator byte is always
    // part of the allocation
    let raw_ptr = unsafe { alloc::alloc(layout) };

    // Some allocators return null instead of panicking
    match NonNull::new(raw_ptr) {
        Some(ptr) => ptr,
        None => alloc::handle_alloc_error(layout),
    }
}

/// # Safety
/// * `ptr` must have been returned by `alloc_buffer(cap)` with the same `cap`
unsafe fn dealloc_buffer(ptr: NonNull<u8>, cap: usize) {
    alloc::dealloc(ptr.as_ptr(), buffer_layout(cap));
}

fn buffer_layout(cap: usize) -> alloc::Layout {
    let size = cap.checked_add(1).expect("valid capacity");
    alloc::Layout::array::<u8>(size).expect("valid capacity")
}

#[cfg(test)]
mod tests {
    use super::HeapBuffer;

    #[test]
    fn empty_still_allocates_terminator() {
        let buffer = HeapBuffer::new();

        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.as_slice(), b"");
        assert_eq!(buffer.as_slice_with_nul(), b"\0");
    }

    #[test]
    fn terminator_follows_every_mutation() {
        let mut buffer = HeapBuffer::from_slice(b"hello");
        assert_eq!(buffer.as_slice_with_nul(), b"hello\0");

        buffer.push_slice(b" world");
        assert_eq!(buffer.as_slice_with_nul(), b"hello world\0");

        // SAFETY: 5 <= capacity, bytes ..5 are initialized
        unsafe { buffer.set_len(5) };
        assert_eq!(buffer.as_slice_with_nul(), b"hello\0");

        buffer.fill_to(8, b'!');
        assert_eq!(buffer.as_slice_with_nul(), b"hello!!!\0");
    }

    #[test]
    fn interior_zero_bytes_roundtrip() {
        let bytes = b"ab\0cd\0";
        let buffer = HeapBuffer::from_slice(bytes);

        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.as_slice(), bytes);
        assert_eq!(buffer.as_slice_with_nul(), b"ab\0cd\0\0");
    }

    #[test]
    fn reserve_amortizes_growth() {
        let mut buffer = HeapBuffer::from_slice(b"0123456789");
        let cap = buffer.capacity();

        buffer.reserve(1);
        // 3/2 of the old capacity, not just one more byte
        assert!(buffer.capacity() >= cap + cap / 2);

        let cap = buffer.capacity();
        buffer.reserve(cap * 10);
        assert!(buffer.capacity() >= cap * 10);
    }

    #[test]
    fn clone_drops_spare_capacity() {
        let mut buffer = HeapBuffer::from_slice(b"abc");
        buffer.reserve(100);
        assert!(buffer.capacity() >= 103);

        let clone = buffer.clone();
        assert_eq!(clone.as_slice(), b"abc");
        assert_eq!(clone.capacity(), 3);
    }

    #[test]
    fn into_vec_preserves_contents() {
        let mut buffer = HeapBuffer::from_slice(b"vector");
        buffer.reserve(10);
        let cap = buffer.capacity();

        let vec = buffer.into_vec();
        assert_eq!(vec, b"vector");
        assert_eq!(vec.capacity(), cap + 1);
    }

    #[test]
    fn from_fill_repeats_byte() {
        let buffer = HeapBuffer::from_fill(4, b'x');
        assert_eq!(buffer.as_slice(), b"xxxx");

        let buffer = HeapBuffer::from_fill(0, b'x');
        assert_eq!(buffer.as_slice(), b"");
        assert_eq!(buffer.as_slice_with_nul(), b"\0");
    }
}
