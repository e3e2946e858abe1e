use serde::Serialize;
use std::path::PathBuf;

pub const MARKER_PREFIX: &str = "// ";
pub const RECORD_SEPARATOR: &str = "\n\n";

/// A directory entry selected for concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub path: PathBuf,
}

/// One marker line plus one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub content: String,
}

impl Record {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn marker_line(&self) -> String {
        format!("{}{}\n", MARKER_PREFIX, self.name)
    }

    /// Marker, content and separator as a single buffer, so a record is
    /// handed to the writer in one piece.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            MARKER_PREFIX.len() + self.name.len() + 1 + self.content.len() + RECORD_SEPARATOR.len(),
        );
        out.push_str(MARKER_PREFIX);
        out.push_str(&self.name);
        out.push('\n');
        out.push_str(&self.content);
        out.push_str(RECORD_SEPARATOR);
        out
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub files: Vec<String>,
    pub content_bytes: u64,
}

impl RunSummary {
    pub fn records_written(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_record() {
        let record = Record::new("a.js", "let x=1;");
        assert_eq!(record.render(), "// a.js\nlet x=1;\n\n");
        assert_eq!(record.marker_line(), "// a.js\n");
    }

    #[test]
    fn test_render_keeps_trailing_newline_of_content() {
        let record = Record::new("b.js", "x();\n");
        assert_eq!(record.render(), "// b.js\nx();\n\n\n");
    }

    #[test]
    fn test_render_empty_content() {
        let record = Record::new("empty.js", "");
        assert_eq!(record.render(), "// empty.js\n\n\n");
    }
}
