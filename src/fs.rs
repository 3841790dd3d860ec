//! Output file writing.
//!
//! Generated sources are written through a temporary sibling file that is
//! synced and then renamed over the target, so a reader never observes a
//! half-written contract. On crash a `.{filename}.tmp` file may remain next
//! to the target.

use crate::error::{GenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to `path`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GenError::UserError(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    if let Err(err) = write_and_sync(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenError::UserError(format!(
            "failed to move output into place at '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Temporary sibling path used while writing `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GenError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        GenError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| GenError::UserError(format!("failed to write temporary file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Invoice.sol");

        write_output(&file_path, "pragma solidity ^0.4.24;\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "pragma solidity ^0.4.24;\n");
    }

    #[test]
    fn test_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Invoice.sol");
        fs::write(&file_path, "old").unwrap();

        write_output(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("build").join("contracts").join("a.sol");

        write_output(&file_path, "x").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
    }

    #[test]
    fn test_temp_file_is_gone_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.sol");

        write_output(&file_path, "x").unwrap();

        assert!(!temp_dir.path().join(".a.sol.tmp").exists());
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("/some/path/file.sol")).unwrap();
        assert_eq!(temp, Path::new("/some/path/.file.sol.tmp"));
    }
}
