mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{CounterCommand, generate::GenerateCommand, info::InfoCommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI definition
#[derive(Debug, Parser)]
#[command(name = "vector-return", version, about = "Count through a natively allocated buffer")]
struct Cli {
    /// Sets the level of verbosity (repeatable)
    #[arg(short, long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// Path to a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a counter and print it joined with `..`
    Generate {
        /// First value of the counter
        #[arg(long)]
        start: Option<usize>,

        /// Number of values to ask for
        #[arg(long)]
        length: Option<usize>,
    },

    /// Show the library limits and the resolved config
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(match cli.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        3.. => LevelFilter::Trace,
    });
    logger.parse_default_env();
    logger.init();

    match cli.command {
        Some(Commands::Generate { start, length }) => GenerateCommand {
            config: cli.config,
            start,
            length,
        }
        .run(),
        Some(Commands::Info) => InfoCommand { config: cli.config }.run(),
        None => GenerateCommand {
            config: cli.config,
            start: None,
            length: None,
        }
        .run(),
    }
}
