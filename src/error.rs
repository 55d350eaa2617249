//! エラーハンドリング
//!
//! crate 全体で使う単一のエラー型。呼び出し側は `?` で伝播する。

use thiserror::Error as ThisError;

/// crate 共通のエラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// I/O 失敗（ファイル・標準入出力）
    #[error("{0}")]
    Io(String),

    /// 引数不正（不正な URL・未知のサイト ID・解析できない日時など）
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// システムエラー（非対話コンテキストでのプロンプト要求など）
    #[error("{0}")]
    System(String),

    /// 環境変数まわりの失敗
    #[error("{0}")]
    Env(String),

    /// JSON の直列化・復元失敗
    #[error("json error: {0}")]
    Json(String),

    /// サブプロセスの生成失敗・待機失敗・異常終了
    ///
    /// 3 種類の失敗をあえて 1 つに畳む。呼び出し側が区別するのは
    /// 「正常終了してコードを返した」か「それ以外」かのみ。
    #[error("process '{program}' failed: {reason}")]
    Process { program: String, reason: String },
}

impl Error {
    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 環境変数エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// サブプロセスエラー
    pub fn process(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Process {
            program: program.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("bad url");
        assert_eq!(err.to_string(), "invalid argument: bad url");

        let err = Error::process("/bin/nothing", "failed to start");
        assert_eq!(
            err.to_string(),
            "process '/bin/nothing' failed: failed to start"
        );
    }
}
