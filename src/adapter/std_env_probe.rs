//! 標準実行環境検出実装（std::env と isatty を委譲）

use crate::ports::outbound::EnvProbe;
use std::env;

/// 標準ライブラリの env と libc の isatty を使う EnvProbe 実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvProbe;

impl EnvProbe for StdEnvProbe {
    /// stdin が端末に繋がっていれば CLI 実行とみなす
    fn is_cli(&self) -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
        }

        #[cfg(not(unix))]
        {
            false
        }
    }

    fn var_or(&self, name: &str, default: &str) -> String {
        env::var(name)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_or_returns_default_when_unset() {
        let probe = StdEnvProbe;
        assert_eq!(probe.var_or("WEBUTIL_NO_SUCH_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_var_or_returns_value_when_set() {
        // PATH はテスト実行環境で必ず設定されている前提
        let probe = StdEnvProbe;
        assert_ne!(probe.var_or("PATH", "fallback"), "fallback");
    }
}
