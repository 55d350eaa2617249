//! セッションコンテキスト
//!
//! 「現在のユーザー・サイト・タイムゾーン上書き」を運ぶ明示的な値。
//! グローバル変数や暗黙のセッション参照の代わりに、呼び出し元が
//! この値を組み立てて各関数へ渡す。

use crate::domain::{SiteId, TimeZoneName, UserId};

/// 1 リクエスト / 1 コマンド実行分のコンテキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 操作しているユーザー
    pub user: UserId,
    /// 属するサイト
    pub site: SiteId,
    /// セッション単位のタイムゾーン上書き（未設定なら None）
    pub timezone_override: Option<TimeZoneName>,
}

impl Session {
    /// タイムゾーン上書きなしのセッションを作る
    pub fn new(user: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            user: UserId::new(user),
            site: SiteId::new(site),
            timezone_override: None,
        }
    }

    /// タイムゾーン上書きを設定する
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone_override = Some(TimeZoneName::new(tz));
        self
    }
}
