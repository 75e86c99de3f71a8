pub mod config;
pub mod controller;

pub use config::CounterConfig;
pub use controller::Controller;
