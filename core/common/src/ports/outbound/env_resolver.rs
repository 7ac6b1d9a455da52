//! 環境変数解決 Outbound ポート
//!
//! 既定のリポジトリ・API ベース URL・ストア・ログの場所を環境変数から解決する。
//! 空文字は未設定とみなす。usecase はこの trait 経由でのみ環境変数にアクセスする。

use std::path::PathBuf;

pub const ENV_REPO: &str = "PROJIMPORT_REPO";
pub const ENV_API_BASE: &str = "PROJIMPORT_API_BASE";
pub const ENV_STORE: &str = "PROJIMPORT_STORE";
pub const ENV_LOG: &str = "PROJIMPORT_LOG";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 引数で省略されたときのリポジトリ（PROJIMPORT_REPO）
    fn default_repo(&self) -> Option<String>;

    /// API のベース URL（PROJIMPORT_API_BASE）
    fn api_base_url(&self) -> Option<String>;

    /// -o 省略時のストアのパス（PROJIMPORT_STORE）
    fn store_path(&self) -> Option<PathBuf>;

    /// JSONL ログの出力先（PROJIMPORT_LOG）。None ならログを出さない
    fn log_file_path(&self) -> Option<PathBuf>;
}
