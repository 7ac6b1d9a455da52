//! projects.json（ストア）の読み書き形式
//!
//! 書き込みは常に `{ "projects": [...] }`。既存エントリは生の JSON のまま引き継ぐ。

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

pub const PROJECTS_KEY: &str = "projects";

/// 既存ストアを読んだ結果
#[derive(Debug, Clone, PartialEq)]
pub enum StoreSnapshot {
    /// ファイルが無い
    Missing,
    /// JSON として読めない（UTF-8 でない場合も含む）
    Unparsable,
    /// 読めた。projects が無い・配列でない場合は空
    Loaded(Vec<Value>),
}

impl StoreSnapshot {
    /// ファイルの中身を解釈する
    ///
    /// トップレベルが配列の場合は古い形式とみなし、その配列を projects として扱う。
    pub fn parse(bytes: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(_) => return Self::Unparsable,
        };
        let projects = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove(PROJECTS_KEY) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self::Loaded(projects)
    }

    pub fn into_projects(self) -> Vec<Value> {
        match self {
            Self::Missing | Self::Unparsable => Vec::new(),
            Self::Loaded(items) => items,
        }
    }

    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Unparsable => "unparsable",
            Self::Loaded(_) => "loaded",
        }
    }
}

/// 書き出すストア全体
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectStore {
    pub projects: Vec<Value>,
}

impl ProjectStore {
    pub fn new(projects: Vec<Value>) -> Self {
        Self { projects }
    }

    /// 末尾にレコードを追加する
    pub fn push<T: Serialize>(&mut self, record: &T) -> Result<(), Error> {
        let value = serde_json::to_value(record)
            .map_err(|e| Error::json(format!("Failed to serialize project: {}", e)))?;
        self.projects.push(value);
        Ok(())
    }

    /// `id` が一致する最初のエントリ
    pub fn find_by_id(&self, id: &str) -> Option<&Value> {
        self.projects
            .iter()
            .find(|p| p.get("id").and_then(Value::as_str) == Some(id))
    }

    /// インデント 4 の JSON 文字列（末尾改行付き）
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| Error::json(format!("Failed to serialize store: {}", e)))?;
        let mut text = String::from_utf8(buf)
            .map_err(|e| Error::system(format!("Serialized store is not UTF-8: {}", e)))?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_with_projects() {
        let snap = StoreSnapshot::parse(br#"{"projects": [{"id": "a"}, {"id": "b"}]}"#);
        assert_eq!(snap.kind(), "loaded");
        let items = snap.into_projects();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "a");
    }

    #[test]
    fn test_parse_object_without_projects() {
        let snap = StoreSnapshot::parse(br#"{"other": 1}"#);
        assert_eq!(snap, StoreSnapshot::Loaded(vec![]));
    }

    #[test]
    fn test_parse_projects_not_array() {
        let snap = StoreSnapshot::parse(br#"{"projects": {"id": "a"}}"#);
        assert_eq!(snap, StoreSnapshot::Loaded(vec![]));
    }

    #[test]
    fn test_parse_legacy_bare_array() {
        let snap = StoreSnapshot::parse(br#"[{"id": "old"}]"#);
        assert_eq!(snap.into_projects(), vec![json!({"id": "old"})]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert_eq!(StoreSnapshot::parse(b"{not json"), StoreSnapshot::Unparsable);
        assert_eq!(StoreSnapshot::parse(b""), StoreSnapshot::Unparsable);
        assert_eq!(StoreSnapshot::parse(&[0xff, 0xfe, 0x00]), StoreSnapshot::Unparsable);
        assert!(StoreSnapshot::Unparsable.into_projects().is_empty());
    }

    #[test]
    fn test_push_and_pretty_json() {
        let mut store = ProjectStore::new(vec![json!({"id": "a"})]);
        store.push(&json!({"id": "b"})).unwrap();
        let text = store.to_pretty_json().unwrap();
        assert!(text.starts_with("{\n    \"projects\": [\n        {"));
        assert!(text.ends_with("}\n"));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["projects"][1]["id"], "b");
    }

    #[test]
    fn test_find_by_id() {
        let store = ProjectStore::new(vec![json!({"id": "a", "n": 1}), json!({"id": "a", "n": 2})]);
        assert_eq!(store.find_by_id("a").unwrap()["n"], 1);
        assert!(store.find_by_id("zzz").is_none());
    }
}
