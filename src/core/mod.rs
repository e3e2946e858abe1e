pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Record, RunSummary, SourceEntry};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::adapters::storage::LocalStorage;
use crate::config::Settings;
use std::path::Path;

/// Concatenates every file in `dir` whose name ends with `suffix` into
/// `output`, one `// <name>` marked record per file.
pub fn concatenate(
    dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    suffix: &str,
) -> Result<RunSummary> {
    let settings = Settings::new(dir.as_ref(), output.as_ref(), suffix);
    crate::utils::validation::Validate::validate(&settings)?;

    let storage = LocalStorage::new(settings.source_dir.clone());
    let output_path = settings.output_path.clone();
    let pipeline = pipeline::ConcatPipeline::new(storage, settings);
    engine::ConcatEngine::new(pipeline, output_path).run()
}
