//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: ストアの読み書き（common の FileSystem / RepositoryApi / Log も利用）

pub mod inbound;
pub mod outbound;
