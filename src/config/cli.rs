use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "filecat")]
#[command(about = "Concatenate every file with a given suffix in a directory into one file")]
pub struct CliConfig {
    /// Directory to scan (not recursive) [default: current directory]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output file, created or overwritten [default: output.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Case-sensitive name suffix to select files [default: .js]
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Allow the output file to be picked up as an input
    #[arg(long)]
    pub include_output: bool,

    /// List the files that would be concatenated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log process CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Builds run settings: defaults, then `--config`, then flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            crate::utils::validation::Validate::validate(&file)?;
            settings = settings.merge_toml(&file);
        }

        if let Some(dir) = &self.dir {
            settings.source_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if let Some(suffix) = &self.suffix {
            settings.suffix = suffix.clone();
        }
        if self.include_output {
            settings.exclude_output = false;
        }
        if self.monitor {
            settings.monitor = true;
        }

        Ok(settings)
    }
}
