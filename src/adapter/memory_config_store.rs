//! メモリ上の設定ストア実装（組み込み・テスト用）

use crate::domain::{TimeZoneName, UserId};
use crate::ports::outbound::ConfigStore;
use std::collections::BTreeMap;

/// BTreeMap を実体とする ConfigStore 実装
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    user_timezones: BTreeMap<UserId, TimeZoneName>,
    global_timezone: Option<TimeZoneName>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーのタイムゾーン設定を登録する
    pub fn with_user_timezone(mut self, user: impl Into<String>, tz: impl Into<String>) -> Self {
        self.user_timezones
            .insert(UserId::new(user), TimeZoneName::new(tz));
        self
    }

    /// 全体のタイムゾーン設定を登録する
    pub fn with_global_timezone(mut self, tz: impl Into<String>) -> Self {
        self.global_timezone = Some(TimeZoneName::new(tz));
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn user_timezone(&self, user: &UserId) -> Option<TimeZoneName> {
        self.user_timezones.get(user).cloned()
    }

    fn global_timezone(&self) -> Option<TimeZoneName> {
        self.global_timezone.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_timezone_lookup() {
        let store = MemoryConfigStore::new().with_user_timezone("alice", "Asia/Tokyo");
        let tz = store.user_timezone(&UserId::new("alice")).unwrap();
        assert_eq!(&*tz, "Asia/Tokyo");
        assert!(store.user_timezone(&UserId::new("bob")).is_none());
    }

    #[test]
    fn test_global_timezone_lookup() {
        let store = MemoryConfigStore::new().with_global_timezone("Europe/Berlin");
        assert_eq!(&*store.global_timezone().unwrap(), "Europe/Berlin");
        assert!(MemoryConfigStore::new().global_timezone().is_none());
    }
}
