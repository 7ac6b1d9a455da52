//! ドメイン型（Newtype、enum、ルール）
//!
//! 「劣化して空にする」類の方針はすべて enum の分岐として表し、テスト可能にする。

pub mod project;
pub mod readme;
pub mod repo_slug;
pub mod store;
pub mod topics;

pub use project::{ProjectKind, ProjectRecord, RepoMetadata, RepoOwner};
pub use readme::{DescriptionLong, ReadmeContent, ReadmeDecodeError};
pub use repo_slug::RepoSlug;
pub use store::{ProjectStore, StoreSnapshot};
pub use topics::Topics;
