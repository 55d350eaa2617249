//! 標準サブプロセス実行（std::process::Command を委譲）

use crate::domain::ProcessSpec;
use crate::error::Error;
use crate::ports::outbound::Process;
use std::process::Command;

/// 標準ライブラリの Command を使う Process 実装
///
/// 環境変数の扱い: `spec.env` が空マップのときは呼び出し元の環境を
/// そのまま継承する。空でないときは継承した環境の上に上書きする
/// （継承を断ち切りたい場合は呼び出し側で明示的に全変数を渡す設計には
/// していない。現状その利用者がいないため）。
#[derive(Debug, Clone, Default)]
pub struct StdProcess;

impl Process for StdProcess {
    fn run(&self, spec: &ProcessSpec) -> Result<i32, Error> {
        let program = spec.program.display().to_string();

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        for (name, value) in &spec.env {
            cmd.env(name, value);
        }

        // status() は spawn と wait の両方を含む。どちらの失敗も
        // 同じ Error::Process に畳む。
        let status = cmd
            .status()
            .map_err(|e| Error::process(&program, format!("failed to run: {}", e)))?;

        match status.code() {
            Some(code) => Ok(code),
            // Unix ではシグナルで停止した場合に code() が None になる
            None => Err(Error::process(
                &program,
                "terminated abnormally (no exit code)",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonexistent_program_is_process_error() {
        let spec = ProcessSpec::new("/no/such/binary");
        let err = StdProcess.run(&spec).unwrap_err();
        assert!(matches!(err, Error::Process { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_normal_exit_code_is_returned() {
        let spec = ProcessSpec::new("/bin/sh").arg("-c").arg("exit 7");
        assert_eq!(StdProcess.run(&spec).unwrap(), 7);
    }
}
