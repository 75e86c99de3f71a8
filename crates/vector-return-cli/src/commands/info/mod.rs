use crate::commands::CounterCommand;
use anyhow::{Context, Result};
use std::path::PathBuf;
use vector_return_runtime::{Controller, CounterConfig};

pub struct InfoCommand {
    pub config: Option<PathBuf>,
}

impl CounterCommand for InfoCommand {
    fn run(self) -> Result<()> {
        let config = CounterConfig::load(self.config.as_ref())
            .with_context(|| "Failed to load counter config")?;
        let controller = Controller::new(config);

        let title = format!("Info for libvector_return {}", env!("CARGO_PKG_VERSION"));
        println!("\n{}", title);
        println!("{}\n", "=".repeat(title.len() + 2));

        println!("- max values per call: {}", controller.max_len());
        println!("\nConfig:\n{}", controller.config.to_string()?);

        Ok(())
    }
}
