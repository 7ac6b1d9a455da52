//! プロジェクトレコードと、その元になるリポジトリ情報

use super::readme::DescriptionLong;
use super::topics::Topics;
use serde::{Deserialize, Serialize};

/// リポジトリ情報 API のレスポンス（使うフィールドのみ）
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: String,
    pub updated_at: String,
    pub owner: RepoOwner,
    #[serde(default)]
    pub topics: Topics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// レコードの `type`（現状 repository のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Repository,
}

/// ストアに保存する 1 プロジェクト分のレコード
///
/// フィールド順がそのまま JSON のキー順になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub tags: Vec<String>,
    /// 手で追加する前提。取り込み時は常に空
    pub screenshots: Vec<String>,
    pub url: String,
    /// API の値をそのまま（ISO 8601）
    pub created_at: String,
    pub updated_at: String,
    pub author: String,
    /// append のときのみ設定される
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_long: Option<DescriptionLong>,
}

impl ProjectRecord {
    pub fn with_description_long(mut self, description_long: DescriptionLong) -> Self {
        self.description_long = Some(description_long);
        self
    }
}

impl From<RepoMetadata> for ProjectRecord {
    fn from(meta: RepoMetadata) -> Self {
        Self {
            id: meta.name.clone(),
            title: meta.name,
            description: meta.description,
            kind: ProjectKind::Repository,
            tags: meta.topics.into_tags(),
            screenshots: Vec::new(),
            url: meta.html_url,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
            author: meta.owner.login,
            description_long: None,
        }
    }
}
