//! 設定ストア Outbound ポート
//!
//! ユーザー単位・全体のタイムゾーン設定を引く。実体（DB・ファイル・
//! メモリ）はアダプター側が持ち、ここでは参照のみを抽象化する。

use crate::domain::{TimeZoneName, UserId};

/// 設定ストアの抽象
///
/// 実装は `crate::adapter::MemoryConfigStore` など。
pub trait ConfigStore: Send + Sync {
    /// ユーザーが設定したタイムゾーン（未設定なら None）
    fn user_timezone(&self, user: &UserId) -> Option<TimeZoneName>;

    /// 全体（インストール単位）のタイムゾーン（未設定なら None）
    fn global_timezone(&self) -> Option<TimeZoneName>;
}
