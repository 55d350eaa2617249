//! プロセス実行の結果をログに記録する Process のラッパ

use crate::domain::ProcessSpec;
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord, Process};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 内側の Process 実装に委譲しつつ、1 実行 1 レコードを記録するラッパ
///
/// コアの StdProcess 自体はログを持たない。観測が必要な場面でのみ
/// このラッパを挟む。ログ書き込みの失敗は実行結果に影響させない。
pub struct LoggingProcess {
    inner: Arc<dyn Process>,
    log: Arc<dyn Log>,
}

impl LoggingProcess {
    pub fn new(inner: Arc<dyn Process>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn record(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            kind: Some("process".to_string()),
            fields: Some(fields),
        });
    }
}

impl Process for LoggingProcess {
    fn run(&self, spec: &ProcessSpec) -> Result<i32, Error> {
        let result = self.inner.run(spec);

        let mut fields = BTreeMap::new();
        fields.insert(
            "program".to_string(),
            serde_json::json!(spec.program.display().to_string()),
        );
        fields.insert("args".to_string(), serde_json::json!(spec.args));

        match &result {
            Ok(code) => {
                fields.insert("exit_code".to_string(), serde_json::json!(code));
                self.record(LogLevel::Info, "process finished", fields);
            }
            Err(e) => {
                fields.insert("error".to_string(), serde_json::json!(e.to_string()));
                self.record(LogLevel::Error, "process failed", fields);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// レコードを溜め込むだけの Log 実装
    #[derive(Default)]
    struct CapturingLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Log for CapturingLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    /// 固定の結果を返す Process 実装
    struct FixedProcess(Result<i32, Error>);

    impl Process for FixedProcess {
        fn run(&self, _spec: &ProcessSpec) -> Result<i32, Error> {
            self.0.clone()
        }
    }

    #[test]
    fn test_success_is_logged_as_info() {
        let log = Arc::new(CapturingLog::default());
        let proc = LoggingProcess::new(Arc::new(FixedProcess(Ok(3))), log.clone());

        let code = proc.run(&ProcessSpec::new("/bin/anything")).unwrap();
        assert_eq!(code, 3);

        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[0].message, "process finished");
    }

    #[test]
    fn test_failure_is_logged_as_error_and_propagated() {
        let log = Arc::new(CapturingLog::default());
        let proc = LoggingProcess::new(
            Arc::new(FixedProcess(Err(Error::process("/bin/x", "failed to run")))),
            log.clone(),
        );

        let err = proc.run(&ProcessSpec::new("/bin/x")).unwrap_err();
        assert!(matches!(err, Error::Process { .. }));

        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Error);
    }
}
