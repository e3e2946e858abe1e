use crate::domain::model::Record;
use crate::utils::error::{FilecatError, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Owns the output document for the length of a run. The handle is closed
/// when the writer is dropped, whether the run finished or failed.
pub struct RecordWriter<W: Write> {
    inner: W,
    path: PathBuf,
    records_written: usize,
    bytes_written: u64,
}

impl RecordWriter<File> {
    /// 建立（或截斷）輸出檔
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FilecatError::io(path, e))?;
        Ok(Self::new(file, path))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            records_written: 0,
            bytes_written: 0,
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let rendered = record.render();
        self.inner
            .write_all(rendered.as_bytes())
            .map_err(|e| FilecatError::io(&self.path, e))?;

        self.records_written += 1;
        self.bytes_written += rendered.len() as u64;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| FilecatError::io(&self.path, e))?;
        Ok(self.inner)
    }
}
