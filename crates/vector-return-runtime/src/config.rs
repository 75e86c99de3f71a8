use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use vector_return_types::err::PrefixError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Arguments used when a caller does not pass its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateConfig {
    #[serde(default)]
    pub start: usize,
    #[serde(default = "default_length")]
    pub length: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            start: 0,
            length: default_length(),
        }
    }
}

fn default_length() -> usize {
    10
}

impl CounterConfig {
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).with_context(|| "Failed to parse counter config")
    }

    pub fn to_string(&self) -> Result<String> {
        toml::to_string(self).with_context(|| "Failed to serialize counter config")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .prefix_err(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&raw)?;
        debug!("Loaded {config:?} from {}", path.display());
        Ok(config)
    }

    /// Reads `path` when given, otherwise falls back to the defaults.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_the_example_call() {
        let config = CounterConfig::default();
        assert_eq!(config.generate.start, 0);
        assert_eq!(config.generate.length, 10);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = CounterConfig::parse("[generate]\nstart = 5\n").unwrap();
        assert_eq!(config.generate.start, 5);
        assert_eq!(config.generate.length, 10);
        assert_eq!(CounterConfig::parse("").unwrap(), CounterConfig::default());
    }

    #[test]
    fn rejects_negative_lengths() {
        assert!(CounterConfig::parse("[generate]\nlength = -1\n").is_err());
    }

    #[test]
    fn serializes_back() {
        let config = CounterConfig::parse("[generate]\nstart = 2\nlength = 3\n").unwrap();
        let again = CounterConfig::parse(&config.to_string().unwrap()).unwrap();
        assert_eq!(config, again);
    }

    #[test_log::test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generate]\nstart = 1\nlength = 2").unwrap();
        let config = CounterConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.generate, GenerateConfig { start: 1, length: 2 });
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CounterConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
