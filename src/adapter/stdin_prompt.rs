//! 標準入出力による対話プロンプト実装

use crate::error::Error;
use crate::ports::outbound::Prompt;
use std::io::{self, BufRead, Write};

/// 標準入出力で問い合わせる Prompt 実装
///
/// message は stderr に出す（stdout はアプリの出力用に空けておく）。
#[derive(Debug, Clone, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, message: &str) -> Result<String, Error> {
        eprint!("{}", message);
        let _ = io::stderr().flush();

        let stdin = io::stdin();
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read from stdin: {}", e)))?;

        // 末尾の改行（LF / CRLF）のみ取り除く
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// 非対話用: 常にエラーを返す Prompt 実装（CI・Web 配下でプロンプトを出さない）
#[derive(Debug, Clone, Default)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn ask(&self, _message: &str) -> Result<String, Error> {
        Err(Error::system("prompt requested in non-interactive context"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prompt_always_fails() {
        let err = NoPrompt.ask("continue? ").unwrap_err();
        assert!(matches!(err, Error::System(_)));
    }
}
