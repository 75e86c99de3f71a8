use anyhow::Result;

use crate::{controller::BufferController, guard::BufferGuard, sequence::Sequence};

/// Generates a native buffer, hands its contents to `f`, then releases it.
///
/// The buffer is released whether `f` succeeds or fails. When `f` fails its
/// error is returned after the release has happened.
pub fn with_buffer<R, F>(
    controller: &mut dyn BufferController,
    start: usize,
    len: usize,
    f: F,
) -> Result<R>
where
    F: FnOnce(&[usize]) -> Result<R>,
{
    let guard = BufferGuard::acquire(controller, start, len)?;
    let result = f(guard.as_slice())?;
    guard.release()?;
    Ok(result)
}

/// Copies a freshly generated native buffer into a caller-owned [`Sequence`].
pub fn materialize(
    controller: &mut dyn BufferController,
    start: usize,
    len: usize,
) -> Result<Sequence> {
    with_buffer(controller, start, len, |values| Ok(Sequence::from(values)))
}

/// Generates `len` values counting up from `start` and joins them with `..`.
pub fn generate(controller: &mut dyn BufferController, start: usize, len: usize) -> Result<String> {
    with_buffer(controller, start, len, |values| {
        Ok(Sequence::from(values).to_string())
    })
}
