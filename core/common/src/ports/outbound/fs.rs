//! ファイルシステム Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルメタデータ（存在・種別）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    is_file: bool,
}

impl FileMetadata {
    pub fn new(is_file: bool) -> Self {
        Self { is_file }
    }

    /// 通常ファイルか（ディレクトリなどは false）
    pub fn is_file(&self) -> bool {
        self.is_file
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem`。
pub trait FileSystem: Send + Sync {
    /// バイト列として読む（UTF-8 かどうかは呼び出し側で判断する）
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;
    /// 内容を丸ごと置き換える（存在しなければ作成）
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
