//! Outbound ポート: アプリが外界（ストアファイル）を使うための trait

pub mod project_store;

pub use project_store::ProjectStoreRepository;
