/// A buffer allocated by the native library, addressed by its first element
/// and the number of elements the library reported.
///
/// There is exactly one owner of a handle. It is neither `Clone` nor `Copy`,
/// and releasing it through a [`BufferController`](crate::controller::BufferController)
/// consumes it, so it cannot be read or released a second time.
#[repr(C)]
#[derive(Debug)]
pub struct NativeBuffer<T> {
    pub ptr: *mut T,
    pub len: usize,
}

impl<T> NativeBuffer<T> {
    pub fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        Self { ptr, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the address can be read through at all: non-null and aligned for `T`.
    pub fn is_valid(&self) -> bool {
        !self.ptr.is_null() && self.ptr.is_aligned()
    }

    pub fn addr(&self) -> usize {
        self.ptr as usize
    }

    /// Views the native memory as a slice.
    ///
    /// # Safety
    ///
    /// The handle must be valid (see [`NativeBuffer::is_valid`]), not yet
    /// released, and point at `len` initialised values of `T`.
    pub unsafe fn as_slice(&self) -> &[T] {
        // SAFETY: upheld by the caller
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }
}
