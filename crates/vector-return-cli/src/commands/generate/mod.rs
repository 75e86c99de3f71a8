use crate::commands::CounterCommand;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use vector_return_runtime::{Controller, CounterConfig};

pub struct GenerateCommand {
    pub config: Option<PathBuf>,
    pub start: Option<usize>,
    pub length: Option<usize>,
}

impl GenerateCommand {
    /// Loads the config file, if any, and applies the flags on top of it.
    pub fn resolve(self) -> Result<CounterConfig> {
        let mut config = CounterConfig::load(self.config.as_ref())
            .with_context(|| "Failed to load counter config")?;

        // Flags win over the config file
        if let Some(start) = self.start {
            config.generate.start = start;
        }
        if let Some(length) = self.length {
            config.generate.length = length;
        }

        Ok(config)
    }
}

impl CounterCommand for GenerateCommand {
    fn run(self) -> Result<()> {
        let mut controller = Controller::new(self.resolve()?);
        info!(
            "Generating {} values starting at {}",
            controller.config.generate.length, controller.config.generate.start
        );

        let result = controller
            .run()
            .with_context(|| "Failed to generate counter")?;

        println!("{result}");

        Ok(())
    }
}
