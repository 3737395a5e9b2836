use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::sort::SortKey;

/// Get the default storage directory: $HOME/.billtracker
pub fn default_storage_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| {
            Error::Config(
                "Could not determine home directory. Set HOME or USERPROFILE environment variable."
                    .to_string(),
            )
        })?;
    Ok(PathBuf::from(home).join(".billtracker"))
}

/// Configuration for a bill-list run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the bills.json data file
    pub data_file: PathBuf,
    /// Directory holding the quick-fill and template records
    pub storage_dir: PathBuf,
    pub sort_key: SortKey,
    pub limit: Option<usize>,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            storage_dir: storage_dir.into(),
            sort_key: SortKey::default(),
            limit: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.data_file.exists() {
            return Err(Error::Config(format!(
                "Bill data file does not exist: {}",
                self.data_file.display()
            )));
        }

        if !self.data_file.is_file() {
            return Err(Error::Config(format!(
                "Bill data path is not a file: {}",
                self.data_file.display()
            )));
        }

        Ok(())
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new(data_file: impl Into<PathBuf>, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::new(data_file, storage_dir),
        }
    }

    /// Set the sort key
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.config.sort_key = key;
        self
    }

    /// Set sort key from string
    pub fn sort_key_str(mut self, key: &str) -> Self {
        self.config.sort_key = SortKey::from(key);
        self
    }

    /// Set the limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Clear the limit
    pub fn no_limit(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_data_file() {
        let config = Config::new("/nonexistent/bills.json", "/tmp");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_sets_sort_and_limit() {
        let builder = ConfigBuilder::new("bills.json", "/tmp")
            .sort_key_str("number")
            .limit(10);
        assert_eq!(builder.config.sort_key, SortKey::BillNumber);
        assert_eq!(builder.config.limit, Some(10));
    }
}
