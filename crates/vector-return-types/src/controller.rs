use anyhow::Result;

use crate::buffer::NativeBuffer;

/// The native side of the generate/free pair.
pub trait BufferController {
    /// Asks the native library for up to `len` values counting up from `start`.
    ///
    /// The returned handle carries the count the library actually produced,
    /// which may be smaller than `len`.
    fn generate(&mut self, start: usize, len: usize) -> Result<NativeBuffer<usize>>;

    /// Gives a buffer back to the native library, using the count it was produced with.
    fn free(&mut self, buffer: NativeBuffer<usize>) -> Result<()>;
}
