//! リポジトリのトピック → レコードの tags

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// API の `topics` フィールドの状態
///
/// 欠落・配列以外はエラーにせず、どちらも空の tags になる。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Topics {
    /// フィールド自体がない
    #[default]
    Missing,
    /// 配列以外の値（null を含む）
    Invalid,
    /// 配列。文字列以外の要素は読み込み時に落とす
    List(Vec<String>),
}

impl Topics {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self::Invalid,
        }
    }

    /// 空文字を除いた tags（元の順序を維持）
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::Missing | Self::Invalid => Vec::new(),
            Self::List(items) => items.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }
}

/// `#[serde(default)]` と組み合わせて使う（欠落時は Missing）
impl<'de> Deserialize<'de> for Topics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        topics: Topics,
    }

    fn parse(v: Value) -> Topics {
        serde_json::from_value::<Holder>(v).unwrap().topics
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(parse(json!({})), Topics::Missing);
        assert!(Topics::Missing.into_tags().is_empty());
    }

    #[test]
    fn test_non_array_is_invalid() {
        assert_eq!(parse(json!({"topics": "rust"})), Topics::Invalid);
        assert_eq!(parse(json!({"topics": null})), Topics::Invalid);
        assert_eq!(parse(json!({"topics": {"a": 1}})), Topics::Invalid);
        assert!(parse(json!({"topics": 3})).into_tags().is_empty());
    }

    #[test]
    fn test_empty_entries_removed_order_kept() {
        let topics = parse(json!({"topics": ["cli", "", "rust", "", "json"]}));
        assert_eq!(topics.into_tags(), vec!["cli", "rust", "json"]);
    }

    #[test]
    fn test_non_string_entries_dropped() {
        let topics = parse(json!({"topics": ["a", 1, null, "b", false]}));
        assert_eq!(topics, Topics::List(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_whitespace_entry_is_kept() {
        let topics = parse(json!({"topics": [" "]}));
        assert_eq!(topics.into_tags(), vec![" "]);
    }
}
