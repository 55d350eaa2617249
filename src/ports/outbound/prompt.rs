//! 対話プロンプト Outbound ポート
//!
//! 標準入力から 1 行読む対話的な問い合わせを trait で抽象化する。

use crate::error::Error;

/// 対話プロンプトの抽象
///
/// 実装は `crate::adapter::StdinPrompt`（標準入出力）や、
/// 非対話コンテキスト用の `crate::adapter::NoPrompt` など。
pub trait Prompt: Send + Sync {
    /// message を表示し、入力 1 行を末尾の改行を除いて返す
    fn ask(&self, message: &str) -> Result<String, Error>;
}
