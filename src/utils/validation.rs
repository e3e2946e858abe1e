use crate::utils::error::{FilecatError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(FilecatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(FilecatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FilecatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// A suffix is matched against bare entry names, so it may not contain a
/// path separator.
pub fn validate_suffix(field_name: &str, suffix: &str) -> Result<()> {
    validate_non_empty_string(field_name, suffix)?;

    if suffix.contains('/') || suffix.contains(std::path::MAIN_SEPARATOR) {
        return Err(FilecatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix cannot contain a path separator".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", Path::new("output.txt")).is_ok());
        assert!(validate_path("output", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_suffix() {
        assert!(validate_suffix("suffix", ".js").is_ok());
        assert!(validate_suffix("suffix", "js").is_ok());
        assert!(validate_suffix("suffix", "").is_err());
        assert!(validate_suffix("suffix", "src/.js").is_err());
    }

    #[test]
    fn test_whitespace_suffix_is_allowed() {
        // 空白也是合法的結尾字元
        assert!(validate_non_empty_string("suffix", " ").is_ok());
    }
}
