use anyhow::Result;

use crate::{buffer::NativeBuffer, controller::BufferController, err::Error};

/// In-process stand-in for the native library that records every release.
#[derive(Debug, Default)]
pub struct MockController {
    pub cap: Option<usize>,
    pub fail_generate: bool,
    pub fail_free: bool,
    pub null_handle: bool,
    pub generated: usize,
    pub frees: Vec<usize>,
}

impl MockController {
    /// Buffers handed out and not yet given back.
    pub fn live(&self) -> usize {
        self.generated - self.frees.len()
    }
}

impl BufferController for MockController {
    fn generate(&mut self, start: usize, len: usize) -> Result<NativeBuffer<usize>> {
        if self.fail_generate {
            return Err(Error::GenerationFailed { start, len }.into());
        }
        if self.null_handle {
            return Ok(NativeBuffer::from_raw_parts(std::ptr::null_mut(), len));
        }

        let len = self.cap.map_or(len, |cap| len.min(cap));
        let values: Box<[usize]> = (start..start + len).collect();
        self.generated += 1;
        Ok(NativeBuffer::from_raw_parts(
            Box::into_raw(values).cast::<usize>(),
            len,
        ))
    }

    fn free(&mut self, buffer: NativeBuffer<usize>) -> Result<()> {
        self.frees.push(buffer.len());
        let slice = std::ptr::slice_from_raw_parts_mut(buffer.ptr, buffer.len());
        // SAFETY: every handle given to `free` was produced by `generate` above
        drop(unsafe { Box::from_raw(slice) });

        if self.fail_free {
            anyhow::bail!("mock release refused");
        }
        Ok(())
    }
}
