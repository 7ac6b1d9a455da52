//! アダプター（projimport 固有の Outbound ポート実装）

pub mod json_file_store;

pub use json_file_store::JsonFileProjectStore;
