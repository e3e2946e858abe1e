use crate::domain::model::{Record, SourceEntry};
use crate::utils::error::Result;
use std::path::Path;

/// Kind of a directory entry, as far as selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// `None` when the name is not valid Unicode.
    pub name: Option<String>,
    pub path: std::path::PathBuf,
    pub kind: EntryKind,
}

pub trait Storage {
    /// Direct children of the source directory, in enumeration order.
    fn list_entries(&self) -> Result<Vec<DirEntryInfo>>;
    fn read_text(&self, path: &Path) -> Result<String>;
}

pub trait ConfigProvider {
    fn source_dir(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn suffix(&self) -> &str;
    fn exclude_output(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceEntry>>;
    fn transform(&self, entry: &SourceEntry) -> Result<Record>;
}
