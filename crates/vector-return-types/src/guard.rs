use anyhow::{Context, Result};
use log::{trace, warn};

use crate::{buffer::NativeBuffer, controller::BufferController, err::Error};

/// Scoped ownership of a native buffer.
///
/// A guard only exists for a handle that came back valid from
/// [`BufferController::generate`]. It releases that handle exactly once:
/// through [`BufferGuard::release`], or on drop if the guard goes out of
/// scope first (an early return, a `?`, a panic unwinding through it).
pub struct BufferGuard<'a> {
    controller: &'a mut dyn BufferController,
    buffer: Option<NativeBuffer<usize>>,
}

impl<'a> BufferGuard<'a> {
    /// Generates a buffer and takes ownership of it.
    ///
    /// Nothing is read and nothing is released when generation fails or the
    /// returned handle can not be read through.
    pub fn acquire(
        controller: &'a mut dyn BufferController,
        start: usize,
        len: usize,
    ) -> Result<Self> {
        let buffer = controller
            .generate(start, len)
            .with_context(|| format!("Failed to generate {len} values starting at {start}"))?;

        if !buffer.is_valid() {
            return Err(Error::InvalidHandle(buffer.addr()).into());
        }

        trace!("Acquired native buffer {:#x} of {} values", buffer.addr(), buffer.len());

        Ok(Self {
            controller,
            buffer: Some(buffer),
        })
    }

    /// The count the native library reported, which is what gets read and released.
    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, NativeBuffer::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        match &self.buffer {
            // SAFETY: the handle was validated in `acquire` and is only released when taken out of `self.buffer`
            Some(buffer) => unsafe { buffer.as_slice() },
            None => &[],
        }
    }

    /// Releases the buffer now, reporting a failed release to the caller.
    pub fn release(mut self) -> Result<()> {
        match self.buffer.take() {
            Some(buffer) => release(&mut *self.controller, buffer),
            None => Ok(()),
        }
    }
}

impl Drop for BufferGuard<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            if let Err(e) = release(&mut *self.controller, buffer) {
                warn!("{e:#}");
            }
        }
    }
}

fn release(controller: &mut dyn BufferController, buffer: NativeBuffer<usize>) -> Result<()> {
    let (addr, len) = (buffer.addr(), buffer.len());
    controller
        .free(buffer)
        .with_context(|| Error::ReleaseFailed(len))?;
    trace!("Released native buffer {addr:#x} of {len} values");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockController;

    #[test]
    fn drop_releases() {
        let mut controller = MockController::default();
        {
            let guard = BufferGuard::acquire(&mut controller, 1, 3).unwrap();
            assert_eq!(guard.as_slice(), &[1, 2, 3]);
        }
        assert_eq!(controller.frees, vec![3]);
    }

    #[test]
    fn explicit_release_is_not_repeated_on_drop() {
        let mut controller = MockController::default();
        let guard = BufferGuard::acquire(&mut controller, 0, 2).unwrap();
        assert_eq!(guard.len(), 2);
        guard.release().unwrap();
        assert_eq!(controller.frees, vec![2]);
    }

    #[test_log::test]
    fn failed_release_on_drop_is_only_logged() {
        let mut controller = MockController {
            fail_free: true,
            ..Default::default()
        };
        drop(BufferGuard::acquire(&mut controller, 0, 1).unwrap());
        assert_eq!(controller.frees, vec![1]);
    }

    #[test]
    fn unwinding_releases() {
        let mut controller = MockController::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let guard = BufferGuard::acquire(&mut controller, 0, 4).unwrap();
            assert!(!guard.is_empty());
            panic!("consumer panicked");
        }));
        assert!(result.is_err());
        assert_eq!(controller.frees, vec![4]);
    }
}
