//! ストアを JSON ファイルで保存・読み込みするアダプタ

use crate::ports::outbound::ProjectStoreRepository;
use common::domain::{ProjectStore, StoreSnapshot};
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

/// FileSystem 経由で projects.json を読み書きする実装
pub struct JsonFileProjectStore {
    fs: Arc<dyn FileSystem>,
}

impl JsonFileProjectStore {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ProjectStoreRepository for JsonFileProjectStore {
    fn load(&self, path: &Path) -> Result<StoreSnapshot, Error> {
        match self.fs.metadata(path) {
            Err(_) => return Ok(StoreSnapshot::Missing),
            Ok(m) if !m.is_file() => {
                return Err(Error::io_msg(format!(
                    "Store '{}' is not a regular file",
                    path.display()
                )))
            }
            Ok(_) => {}
        }
        let bytes = self.fs.read(path)?;
        Ok(StoreSnapshot::parse(&bytes))
    }

    fn save(&self, path: &Path, store: &ProjectStore) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.fs.exists(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }
        let json = store.to_pretty_json()?;
        self.fs.write(path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use serde_json::json;

    fn storage() -> JsonFileProjectStore {
        JsonFileProjectStore::new(Arc::new(StdFileSystem))
    }

    #[test]
    fn test_load_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let snap = storage().load(&tmp.path().join("projects.json")).unwrap();
        assert_eq!(snap, StoreSnapshot::Missing);
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = storage().load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_load_corrupt() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, "{\"projects\": [").unwrap();
        assert_eq!(storage().load(&path).unwrap(), StoreSnapshot::Unparsable);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data/projects.json");
        let store = ProjectStore::new(vec![json!({"id": "a"}), json!({"id": "b"})]);
        storage().save(&path, &store).unwrap();

        let snap = storage().load(&path).unwrap();
        assert_eq!(snap, StoreSnapshot::Loaded(store.projects.clone()));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"projects\""));
    }

    #[test]
    fn test_save_replaces_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();
        storage().save(&path, &ProjectStore::default()).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v, json!({"projects": []}));
    }
}
