//! リポジトリホスティング API の Outbound ポート
//!
//! ステータスの解釈（200 以外で中断するか劣化するか）は usecase 側で行う。
//! 実装は通信そのものだけを担い、通信エラーのみを Err にする。

use crate::domain::RepoSlug;
use crate::error::Error;

/// HTTP レスポンス（ステータスと本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 のときだけ true（他の 2xx も失敗扱い）
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// リポジトリ情報と README を取得する能力
pub trait RepositoryApi: Send + Sync {
    /// GET /repos/{owner}/{name}
    fn get_repository(&self, slug: &RepoSlug) -> Result<HttpReply, Error>;
    /// GET /repos/{owner}/{name}/readme
    fn get_readme(&self, slug: &RepoSlug) -> Result<HttpReply, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_ok() {
        assert!(HttpReply::new(200, "{}").is_ok());
        assert!(!HttpReply::new(204, "").is_ok());
        assert!(!HttpReply::new(404, "").is_ok());
    }
}
