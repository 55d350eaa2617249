//! ファイルシステム Outbound ポート
//!
//! ファイル実装のアダプター（sites.json・JSONL ログ）はこの trait 経由で
//! のみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `crate::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
