use crate::domain::ports::{DirEntryInfo, EntryKind, Storage};
use crate::utils::error::{FilecatError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads entries and file contents from a directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn entry_kind(entry: &fs::DirEntry) -> io::Result<EntryKind> {
        let file_type = entry.file_type()?;
        // 符號連結以目標檔案類型為準，斷掉的連結視為 Other
        let file_type = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) => meta.file_type(),
                Err(_) => return Ok(EntryKind::Other),
            }
        } else {
            file_type
        };

        Ok(if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }
}

impl Storage for LocalStorage {
    fn list_entries(&self) -> Result<Vec<DirEntryInfo>> {
        match fs::metadata(&self.base_path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(FilecatError::DirectoryNotFound {
                    path: self.base_path.clone(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FilecatError::DirectoryNotFound {
                    path: self.base_path.clone(),
                })
            }
            Err(e) => return Err(FilecatError::io(&self.base_path, e)),
        }

        let read_dir =
            fs::read_dir(&self.base_path).map_err(|e| FilecatError::io(&self.base_path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FilecatError::io(&self.base_path, e))?;
            let kind = Self::entry_kind(&entry).map_err(|e| FilecatError::io(entry.path(), e))?;
            entries.push(DirEntryInfo {
                name: entry.file_name().into_string().ok(),
                path: entry.path(),
                kind,
            });
        }

        tracing::debug!(
            "Listed {} entries in {}",
            entries.len(),
            self.base_path.display()
        );
        Ok(entries)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| FilecatError::io(path, e))?;
        String::from_utf8(bytes).map_err(|_| FilecatError::Encoding {
            path: path.to_path_buf(),
        })
    }
}
