//! ドメイン型（コマンド enum、一覧表示用の要約）

pub mod command;
pub mod project_summary;

pub use command::Command;
pub use project_summary::ProjectSummary;
