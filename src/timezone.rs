//! タイムゾーン解決チェーン
//!
//! セッションの上書き → ユーザー設定 → 全体設定 → UTC の順で解決する。
//! 各段で空文字列は「未設定」とみなして次へ進む。

use crate::domain::TimeZoneName;
use crate::ports::outbound::ConfigStore;
use crate::session::Session;

/// セッションと設定ストアからタイムゾーン名を解決する
///
/// どの段にも値が無ければ "UTC" を返す。失敗しない。
pub fn resolve_timezone(session: &Session, store: &dyn ConfigStore) -> TimeZoneName {
    if let Some(tz) = &session.timezone_override {
        if !tz.is_empty() {
            return tz.clone();
        }
    }

    if let Some(tz) = store.user_timezone(&session.user) {
        if !tz.is_empty() {
            return tz;
        }
    }

    if let Some(tz) = store.global_timezone() {
        if !tz.is_empty() {
            return tz;
        }
    }

    TimeZoneName::new("UTC")
}
