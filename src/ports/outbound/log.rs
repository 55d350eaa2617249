//! 構造化ログ Outbound ポート
//!
//! JSONL ログをファイルに出力するための trait。エラー時のコンソール表示
//! （stderr）とは別チャネルで、ファイルにのみ書き出す。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: process, site, timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は `crate::adapter::FileJsonLog`（ファイルへ JSONL 追記）や
/// `crate::adapter::NoopLog`（テスト用）など。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す（ファイルへ JSONL 1 行として追記）
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}
