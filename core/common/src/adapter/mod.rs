//! アダプター（ポートの標準実装）
//!
//! usecase はポートの trait 経由でのみファイル・HTTP・ログ・環境変数に触れる。
//! 実装は標準実装（Std* / GithubApi / FileJsonLog）やテスト用のスタブを注入する。

pub mod file_json_log;
pub mod github_api;
pub mod std_env_resolver;
pub mod std_fs;

pub use crate::ports::outbound::{FileMetadata, FileSystem};
pub use file_json_log::{FileJsonLog, NoopLog};
pub use github_api::GithubApi;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
