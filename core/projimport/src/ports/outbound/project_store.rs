//! ストア（projects.json）の読み書き Outbound ポート

use common::domain::{ProjectStore, StoreSnapshot};
use common::error::Error;
use std::path::Path;

/// ストアを読み込み・丸ごと書き出す能力
pub trait ProjectStoreRepository: Send + Sync {
    /// ファイルが無い・壊れている場合もエラーにせず StoreSnapshot で返す。
    /// 読み込み自体に失敗した場合（権限など）のみ Err。
    fn load(&self, path: &Path) -> Result<StoreSnapshot, Error>;

    /// 既存の内容を置き換える（ロックなし・最後に書いたものが残る）
    fn save(&self, path: &Path, store: &ProjectStore) -> Result<(), Error>;
}
