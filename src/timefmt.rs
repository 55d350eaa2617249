//! 日時の解析と整形（chrono の薄いラッパ）
//!
//! 表示フォーマットは `%Y-%m-%d %H:%M:%S` 系に固定する。
//! 「現在時刻」は Clock ポート経由で受け取り、テスト可能に保つ。

use crate::error::Error;
use crate::ports::outbound::Clock;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_HM_FORMAT: &str = "%H:%M";

/// "2026-08-30 09:15:00" 形式の文字列を解析する
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, Error> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT)
        .map_err(|e| Error::invalid_argument(format!("cannot parse datetime '{}': {}", input, e)))
}

/// "2026-08-30" 形式の文字列を解析する
pub fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| Error::invalid_argument(format!("cannot parse date '{}': {}", input, e)))
}

/// "2026-08-30 09:15:00" 形式に整形する
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// "2026-08-30" 形式に整形する
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// "09:15" 形式に整形する
pub fn format_time_hm(time: &NaiveTime) -> String {
    time.format(TIME_HM_FORMAT).to_string()
}

/// 現在時刻（UTC）を "2026-08-30 09:15:00" 形式で返す
pub fn now_formatted(clock: &dyn Clock) -> String {
    let ms = clock.now_ms();
    let dt = DateTime::from_timestamp_millis(ms as i64)
        .unwrap_or_default()
        .naive_utc();
    format_datetime(&dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 固定時刻を返す Clock 実装
    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_parse_and_format_datetime_roundtrip() {
        let dt = parse_datetime("2026-08-30 09:15:00").unwrap();
        assert_eq!(format_datetime(&dt), "2026-08-30 09:15:00");
    }

    #[test]
    fn test_parse_datetime_trims_whitespace() {
        let dt = parse_datetime("  2026-08-30 09:15:00\n").unwrap();
        assert_eq!(format_datetime(&dt), "2026-08-30 09:15:00");
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let err = parse_datetime("not a date").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = parse_datetime("2026-13-45 99:99:99").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_date() {
        let d = parse_date("2026-08-30").unwrap();
        assert_eq!(format_date(&d), "2026-08-30");
        assert!(parse_date("08/30/2026").is_err());
    }

    #[test]
    fn test_format_time_hm() {
        let t = NaiveTime::from_hms_opt(9, 5, 33).unwrap();
        assert_eq!(format_time_hm(&t), "09:05");
    }

    #[test]
    fn test_now_formatted_uses_clock() {
        // 2026-08-30 00:00:00 UTC
        let clock = FixedClock(1_788_048_000_000);
        assert_eq!(now_formatted(&clock), "2026-08-30 00:00:00");
    }
}
