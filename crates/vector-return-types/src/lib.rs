pub mod buffer;
pub mod controller;
pub mod convert;
pub mod err;
pub mod guard;
pub mod sequence;

#[cfg(test)]
mod mock;

pub use buffer::NativeBuffer;
pub use controller::BufferController;
pub use convert::{generate, materialize, with_buffer};
pub use guard::BufferGuard;
pub use sequence::{DELIMITER, Sequence};
