//! Outbound ポート: アプリが外界（FS・リポジトリ API・ログ・環境変数）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod repository_api;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use repository_api::{HttpReply, RepositoryApi};
