//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!(
                    "Failed to open '{}' for append: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Box::new(f))
    }
}
