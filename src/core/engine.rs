use crate::adapters::writer::RecordWriter;
use crate::core::{Pipeline, RunSummary, SourceEntry};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::{Path, PathBuf};

pub struct ConcatEngine<P: Pipeline> {
    pipeline: P,
    output_path: PathBuf,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConcatEngine<P> {
    pub fn new(pipeline: P, output_path: impl Into<PathBuf>) -> Self {
        Self::new_with_monitoring(pipeline, output_path, false)
    }

    pub fn new_with_monitoring(
        pipeline: P,
        output_path: impl Into<PathBuf>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            pipeline,
            output_path: output_path.into(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Lists what a run would concatenate without touching the output file.
    pub fn plan(&self) -> Result<Vec<SourceEntry>> {
        self.pipeline.extract()
    }

    /// Truncates the output, then reads and appends one matching file at a
    /// time. The first failure aborts the run; records already written stay
    /// in the output.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting concatenation into {}", self.output_path.display());
        self.monitor.log_stats("Start");

        let mut writer = RecordWriter::create(&self.output_path)?;

        // Extract
        let entries = self.pipeline.extract()?;
        tracing::info!("Found {} matching files", entries.len());
        self.monitor.log_stats("Extract");

        // Transform + Load，一次只開一個來源檔
        let mut summary = RunSummary {
            output_path: self.output_path.clone(),
            ..Default::default()
        };
        for entry in &entries {
            let record = self.pipeline.transform(entry)?;
            writer.write_record(&record)?;
            summary.content_bytes += record.content.len() as u64;
            summary.files.push(record.name);
        }

        let written = writer.records_written();
        writer.finish()?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        tracing::info!(
            "Wrote {} records ({} content bytes) to {}",
            written,
            summary.content_bytes,
            self.output_path.display()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::utils::error::FilecatError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct ScriptedPipeline {
        entries: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    impl Pipeline for ScriptedPipeline {
        fn extract(&self) -> Result<Vec<SourceEntry>> {
            Ok(self
                .entries
                .iter()
                .map(|name| SourceEntry {
                    name: name.to_string(),
                    path: PathBuf::from(name),
                })
                .collect())
        }

        fn transform(&self, entry: &SourceEntry) -> Result<Record> {
            if self.fail_on == Some(entry.name.as_str()) {
                return Err(FilecatError::Encoding {
                    path: entry.path.clone(),
                });
            }
            Ok(Record::new(entry.name.clone(), format!("/* {} */", entry.name)))
        }
    }

    #[test]
    fn test_run_writes_every_record() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let engine = ConcatEngine::new(
            ScriptedPipeline {
                entries: vec!["a.js", "b.js"],
                fail_on: None,
            },
            &output,
        );

        let summary = engine.run().unwrap();
        assert_eq!(summary.records_written(), 2);
        assert_eq!(summary.files, vec!["a.js", "b.js"]);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "// a.js\n/* a.js */\n\n// b.js\n/* b.js */\n\n"
        );
    }

    #[test]
    fn test_failure_keeps_completed_records() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let engine = ConcatEngine::new(
            ScriptedPipeline {
                entries: vec!["a.js", "bad.js", "c.js"],
                fail_on: Some("bad.js"),
            },
            &output,
        );

        let err = engine.run().unwrap_err();
        assert!(matches!(err, FilecatError::Encoding { .. }));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "// a.js\n/* a.js */\n\n"
        );
    }

    #[test]
    fn test_plan_does_not_create_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let engine = ConcatEngine::new(
            ScriptedPipeline {
                entries: vec!["a.js"],
                fail_on: None,
            },
            &output,
        );

        assert_eq!(engine.plan().unwrap().len(), 1);
        assert!(!output.exists());
    }
}
