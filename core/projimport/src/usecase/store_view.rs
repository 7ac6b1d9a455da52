//! list / show コマンドのユースケース（ストアの参照のみ）

use crate::domain::ProjectSummary;
use crate::ports::outbound::ProjectStoreRepository;
use common::domain::{ProjectStore, StoreSnapshot};
use common::error::Error;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub struct StoreViewUseCase {
    store: Arc<dyn ProjectStoreRepository>,
}

impl StoreViewUseCase {
    pub fn new(store: Arc<dyn ProjectStoreRepository>) -> Self {
        Self { store }
    }

    /// 保存順の要約一覧。ファイルが無ければ空。
    pub fn list(&self, store_path: &Path) -> Result<Vec<ProjectSummary>, Error> {
        let store = self.load(store_path)?;
        Ok(store.projects.iter().map(ProjectSummary::from_value).collect())
    }

    /// id が一致する最初のエントリ
    pub fn show(&self, store_path: &Path, id: &str) -> Result<Value, Error> {
        self.load(store_path)?
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("Project '{}' not found", id)))
    }

    /// 参照系では壊れたストアを空扱いにせずエラーにする
    fn load(&self, store_path: &Path) -> Result<ProjectStore, Error> {
        match self.store.load(store_path)? {
            StoreSnapshot::Unparsable => Err(Error::json(format!(
                "Store '{}' is not valid JSON",
                store_path.display()
            ))),
            snapshot => Ok(ProjectStore::new(snapshot.into_projects())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::JsonFileProjectStore;
    use common::adapter::StdFileSystem;

    fn use_case() -> StoreViewUseCase {
        StoreViewUseCase::new(Arc::new(JsonFileProjectStore::new(Arc::new(StdFileSystem))))
    }

    #[test]
    fn test_list_in_store_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(
            &path,
            r#"{"projects": [
                {"id": "b", "title": "B", "author": "x"},
                {"id": "a", "title": "A", "author": "y"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<String> = use_case().list(&path).unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_list_missing_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(use_case().list(&tmp.path().join("none.json")).unwrap().is_empty());
    }

    #[test]
    fn test_list_reads_legacy_array() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, r#"[{"id": "old"}]"#).unwrap();
        assert_eq!(use_case().list(&path).unwrap()[0].id, "old");
    }

    #[test]
    fn test_unparsable_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, "{").unwrap();
        let err = use_case().list(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(use_case().show(&path, "a").is_err());
    }

    #[test]
    fn test_show_first_match() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(
            &path,
            r#"{"projects": [{"id": "a", "n": 1}, {"id": "a", "n": 2}]}"#,
        )
        .unwrap();
        assert_eq!(use_case().show(&path, "a").unwrap()["n"], 1);
        let err = use_case().show(&path, "zzz").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
