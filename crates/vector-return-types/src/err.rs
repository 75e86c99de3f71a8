use anyhow::Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Native generation of {len} values starting at {start} failed")]
    GenerationFailed { start: usize, len: usize },

    #[error("Native library returned an invalid buffer handle at {0:#x}")]
    InvalidHandle(usize),

    #[error("Failed to release a native buffer of {0} values")]
    ReleaseFailed(usize),
}

pub trait PrefixError<T> {
    fn prefix_err<F, S>(self, prefix: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: std::fmt::Display;
}

impl<T, E> PrefixError<T> for std::result::Result<T, E>
where
    E: std::fmt::Display + Send + Sync + 'static,
{
    fn prefix_err<F, S>(self, prefix: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: std::fmt::Display,
    {
        self.map_err(|e| anyhow::anyhow!(format!("{}: {}", prefix(), e)))
    }
}
