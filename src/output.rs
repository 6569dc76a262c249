//! File output
//!
//! Writes generated text to disk, creating parent directories as needed.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Default banner line for generated files
pub const GENERATED_BANNER: &str = "// Code generated by typegen; DO NOT EDIT.";

/// Write text to a file, creating parent directories first.
pub fn write_text_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::output(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents)
        .map_err(|e| Error::output(format!("Failed to write '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types/nested/types.ts");

        write_text_file(&path, "export interface Main {\n}\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "export interface Main {\n}\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.ts");

        write_text_file(&path, "first").unwrap();
        write_text_file(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
