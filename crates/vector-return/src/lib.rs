pub mod memory;

pub use memory::{COUNTER_MAX_LEN, counter_free, counter_generate, counter_max_len};
