//! Ports & Adapters のポート定義
//!
//! common はライブラリなので inbound は持たない。outbound はアプリが外界（FS・HTTP・ログ・環境変数）を使うための trait。

pub mod outbound;
