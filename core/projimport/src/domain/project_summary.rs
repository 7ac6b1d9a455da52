//! list 表示用のプロジェクト要約

use serde_json::Value;

/// ストアの 1 エントリから取り出した表示用の要約
///
/// ストアには手で編集されたエントリもあり得るため、欠けたフィールドは空文字にする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub author: String,
}

impl ProjectSummary {
    pub fn from_value(v: &Value) -> Self {
        let text = |key: &str| v.get(key).and_then(Value::as_str).unwrap_or("").to_string();
        Self {
            id: text("id"),
            title: text("title"),
            author: text("author"),
        }
    }
}
