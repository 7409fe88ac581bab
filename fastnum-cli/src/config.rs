//! Configuration handling for the fastnum CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for printed doubles; shortest round-trip form when unset
    #[serde(default)]
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Report bad fields and keep going instead of stopping at the first one
    #[serde(default)]
    pub skip_invalid: bool,

    /// Print count, sum, min and max after scanning
    #[serde(default = "default_true")]
    pub summary: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            summary: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Load configuration from file or use defaults
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        read_config(&path)
    } else if let Some(home) = dirs::home_dir() {
        let default_path = home.join(".fastnum").join("config.toml");
        if default_path.exists() {
            read_config(&default_path)
        } else {
            Ok(Config::default())
        }
    } else {
        Ok(Config::default())
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.precision, None);
        assert!(!config.scan.skip_invalid);
        assert!(config.scan.summary);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nprecision = 3\n\n[scan]\nskip_invalid = true").unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.output.precision, Some(3));
        assert!(config.scan.skip_invalid);
        // missing keys fall back to defaults
        assert!(config.scan.summary);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = NamedTempFile::new().unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nsummary = \"yes\"").unwrap();
        assert!(load_config(Some(file.path().to_path_buf())).is_err());

        assert!(load_config(Some(PathBuf::from("/nonexistent/fastnum.toml"))).is_err());
    }
}
