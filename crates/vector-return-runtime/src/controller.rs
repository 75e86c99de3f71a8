use anyhow::Result;
use log::trace;
use vector_return::{counter_free, counter_generate, counter_max_len};
use vector_return_types::{
    buffer::NativeBuffer, controller::BufferController, convert, err::Error, sequence::Sequence,
};

use crate::config::CounterConfig;

/// Drives the linked native counter library.
#[derive(Debug, Default)]
pub struct Controller {
    pub config: CounterConfig,
}

impl Controller {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    /// The most values a single call can return.
    pub fn max_len(&self) -> usize {
        counter_max_len()
    }

    /// Generates `len` values counting up from `start`, joined with `..`.
    pub fn generate_joined(&mut self, start: usize, len: usize) -> Result<String> {
        convert::generate(self, start, len)
    }

    pub fn materialize(&mut self, start: usize, len: usize) -> Result<Sequence> {
        convert::materialize(self, start, len)
    }

    /// Generates with the configured start and length.
    pub fn run(&mut self) -> Result<String> {
        let (start, len) = (self.config.generate.start, self.config.generate.length);
        self.generate_joined(start, len)
    }
}

impl BufferController for Controller {
    fn generate(&mut self, start: usize, len: usize) -> Result<NativeBuffer<usize>> {
        let mut vec: *mut usize = std::ptr::null_mut();
        // SAFETY: `vec` is a live local, valid for the single write the library makes
        let count = unsafe { counter_generate(start, len, &mut vec) };
        if vec.is_null() {
            return Err(Error::GenerationFailed { start, len }.into());
        }
        trace!("counter_generate({start}, {len}) produced {count} values");
        Ok(NativeBuffer::from_raw_parts(vec, count))
    }

    fn free(&mut self, buffer: NativeBuffer<usize>) -> Result<()> {
        if !buffer.is_valid() {
            return Err(Error::InvalidHandle(buffer.addr()).into());
        }
        // SAFETY: the handle came from `counter_generate` with this count and is consumed here
        unsafe { counter_free(buffer.ptr, buffer.len) };
        Ok(())
    }
}
