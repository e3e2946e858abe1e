pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{storage::LocalStorage, writer::RecordWriter};
pub use config::Settings;
pub use crate::core::{concatenate, engine::ConcatEngine, pipeline::ConcatPipeline};
pub use domain::model::{Record, RunSummary, SourceEntry};
pub use utils::error::{FilecatError, Result};
