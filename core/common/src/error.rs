//! エラーハンドリング
//!
//! 種別ごとに終了コード（sysexits 相当）を持つ。main は `exit_code()` をそのままプロセスの終了コードにする。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 引数不正（usage を併せて表示する）
    #[error("{0}")]
    InvalidArgs(String),

    /// JSON の解析・生成失敗
    #[error("{0}")]
    Json(String),

    /// 対象が見つからない
    #[error("{0}")]
    NotFound(String),

    /// 内部エラー
    #[error("{0}")]
    System(String),

    /// ファイル I/O
    #[error("{0}")]
    Io(String),

    /// HTTP 通信・ステータス異常
    #[error("{0}")]
    Http(String),

    /// 環境変数・設定の不備
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgs(_) => 64,
            Self::Json(_) => 65,
            Self::NotFound(_) => 66,
            Self::System(_) => 70,
            Self::Io(_) | Self::Http(_) => 74,
            Self::Env(_) => 78,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());

        assert_eq!(Error::http("x").exit_code(), 74);
        assert_eq!(Error::json("x").exit_code(), 65);
        assert_eq!(Error::env("x").exit_code(), 78);
    }
}
