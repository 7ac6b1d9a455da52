//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error> {
        std::fs::read(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(FileMetadata::new(m.is_file()))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.json");
        let fs = StdFileSystem;
        assert!(!fs.exists(&path));
        fs.write(&path, "[1]").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read(&path).unwrap(), b"[1]");
        let meta = fs.metadata(&path).unwrap();
        assert!(meta.is_file());
        assert!(!fs.metadata(tmp.path()).unwrap().is_file());
    }

    #[test]
    fn test_open_append_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.jsonl");
        let fs = StdFileSystem;
        {
            let mut w = fs.open_append(&path).unwrap();
            w.write_all(b"a\n").unwrap();
        }
        {
            let mut w = fs.open_append(&path).unwrap();
            w.write_all(b"b\n").unwrap();
        }
        assert_eq!(fs.read(&path).unwrap(), b"a\nb\n");
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = StdFileSystem.read(&tmp.path().join("none")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("Failed to read"));
    }
}
