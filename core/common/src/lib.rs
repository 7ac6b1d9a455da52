//! projimport 共通ライブラリ
//!
//! プロジェクトレコードのドメイン型と、外界（FS・HTTP・ログ・環境変数）へのポート／標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（レコード・トピック・README・ストア）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
