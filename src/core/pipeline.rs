use crate::core::{ConfigProvider, Pipeline, Record, SourceEntry, Storage};
use crate::domain::ports::EntryKind;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Selects suffix-matching regular files from a [`Storage`] and turns each
/// one into a [`Record`].
pub struct ConcatPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConcatPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Resolved location of the output file, used to keep it out of its own
    /// input. `None` if it does not exist yet, in which case it cannot be
    /// listed either.
    fn resolved_output(&self) -> Option<PathBuf> {
        std::fs::canonicalize(self.config.output_path()).ok()
    }

    fn is_output(resolved_output: Option<&Path>, candidate: &Path) -> bool {
        match resolved_output {
            Some(output) => std::fs::canonicalize(candidate)
                .map(|c| c == output)
                .unwrap_or(false),
            None => false,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConcatPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceEntry>> {
        let suffix = self.config.suffix();
        let resolved_output = if self.config.exclude_output() {
            self.resolved_output()
        } else {
            None
        };

        let mut selected = Vec::new();
        for entry in self.storage.list_entries()? {
            let Some(name) = entry.name else {
                tracing::trace!("Skipping non-UTF-8 entry {}", entry.path.display());
                continue;
            };

            if !name.ends_with(suffix) {
                tracing::trace!("Skipping {} (suffix mismatch)", name);
                continue;
            }

            if entry.kind != EntryKind::File {
                tracing::debug!("Skipping {} (not a regular file)", name);
                continue;
            }

            if Self::is_output(resolved_output.as_deref(), &entry.path) {
                tracing::debug!("Skipping {} (output file)", name);
                continue;
            }

            selected.push(SourceEntry {
                name,
                path: entry.path,
            });
        }

        tracing::debug!("Selected {} files ending with '{}'", selected.len(), suffix);
        Ok(selected)
    }

    fn transform(&self, entry: &SourceEntry) -> Result<Record> {
        let content = self.storage.read_text(&entry.path)?;
        tracing::debug!("Read {} ({} bytes)", entry.name, content.len());
        Ok(Record::new(entry.name.clone(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DirEntryInfo;
    use crate::utils::error::FilecatError;
    use std::collections::HashMap;

    struct MemoryStorage {
        entries: Vec<DirEntryInfo>,
        contents: HashMap<PathBuf, String>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            Self {
                entries: Vec::new(),
                contents: HashMap::new(),
            }
        }

        fn file(mut self, name: &str, content: &str) -> Self {
            let path = PathBuf::from("/mem").join(name);
            self.entries.push(DirEntryInfo {
                name: Some(name.to_string()),
                path: path.clone(),
                kind: EntryKind::File,
            });
            self.contents.insert(path, content.to_string());
            self
        }

        fn dir(mut self, name: &str) -> Self {
            self.entries.push(DirEntryInfo {
                name: Some(name.to_string()),
                path: PathBuf::from("/mem").join(name),
                kind: EntryKind::Directory,
            });
            self
        }
    }

    impl Storage for MemoryStorage {
        fn list_entries(&self) -> Result<Vec<DirEntryInfo>> {
            Ok(self.entries.clone())
        }

        fn read_text(&self, path: &Path) -> Result<String> {
            self.contents
                .get(path)
                .cloned()
                .ok_or_else(|| FilecatError::Encoding {
                    path: path.to_path_buf(),
                })
        }
    }

    struct TestConfig {
        suffix: String,
        output: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn source_dir(&self) -> &Path {
            Path::new("/mem")
        }

        fn output_path(&self) -> &Path {
            &self.output
        }

        fn suffix(&self) -> &str {
            &self.suffix
        }

        fn exclude_output(&self) -> bool {
            true
        }
    }

    fn config(suffix: &str) -> TestConfig {
        TestConfig {
            suffix: suffix.to_string(),
            output: PathBuf::from("/mem/does-not-exist/output.txt"),
        }
    }

    #[test]
    fn test_extract_keeps_enumeration_order() {
        let storage = MemoryStorage::new()
            .file("z.js", "z")
            .file("notes.txt", "n")
            .file("a.js", "a")
            .file("m.js", "m");
        let pipeline = ConcatPipeline::new(storage, config(".js"));

        let names: Vec<String> = pipeline
            .extract()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["z.js", "a.js", "m.js"]);
    }

    #[test]
    fn test_extract_skips_directories() {
        let storage = MemoryStorage::new().dir("vendor.js").file("app.js", "x");
        let pipeline = ConcatPipeline::new(storage, config(".js"));

        let selected = pipeline.extract().unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "app.js");
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let storage = MemoryStorage::new().file("UPPER.JS", "x").file("lower.js", "y");
        let pipeline = ConcatPipeline::new(storage, config(".js"));

        let selected = pipeline.extract().unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "lower.js");
    }

    #[test]
    fn test_transform_builds_record() {
        let storage = MemoryStorage::new().file("a.js", "let x=1;");
        let pipeline = ConcatPipeline::new(storage, config(".js"));

        let entry = pipeline.extract().unwrap().remove(0);
        let record = pipeline.transform(&entry).unwrap();
        assert_eq!(record, Record::new("a.js", "let x=1;"));
    }
}
