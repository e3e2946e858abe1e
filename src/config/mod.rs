#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_SOURCE_DIR: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
pub const DEFAULT_SUFFIX: &str = ".js";

/// Fully resolved run settings: built-in defaults, then the TOML file, then
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    pub suffix: String,
    pub exclude_output: bool,
    pub monitor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            suffix: DEFAULT_SUFFIX.to_string(),
            exclude_output: true,
            monitor: false,
        }
    }
}

impl Settings {
    pub fn new(source_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>, suffix: &str) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: output_path.into(),
            suffix: suffix.to_string(),
            ..Default::default()
        }
    }

    /// 套用 TOML 檔中有設定的欄位
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(dir) = &file.source.directory {
            self.source_dir = dir.clone();
        }
        if let Some(suffix) = &file.source.suffix {
            self.suffix = suffix.clone();
        }
        if let Some(exclude) = file.source.exclude_output {
            self.exclude_output = exclude;
        }
        if let Some(path) = &file.output.path {
            self.output_path = path.clone();
        }
        if file.monitoring.is_some() {
            self.monitor = file.monitoring_enabled();
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn exclude_output(&self) -> bool {
        self.exclude_output
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source_dir", &self.source_dir)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_suffix("suffix", &self.suffix)?;
        Ok(())
    }
}
