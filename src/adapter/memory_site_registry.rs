//! メモリ上のサイトレジストリ実装（組み込み・テスト用）

use crate::domain::{Host, SiteId, SiteName};
use crate::error::Error;
use crate::ports::outbound::SiteRegistry;
use std::collections::BTreeMap;

/// サイト 1 件分の登録内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    pub name: SiteName,
    pub host: Host,
}

/// BTreeMap を実体とする SiteRegistry 実装
#[derive(Debug, Clone, Default)]
pub struct MemorySiteRegistry {
    sites: BTreeMap<String, SiteEntry>,
}

impl MemorySiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// サイトを 1 件登録する（同じ ID は上書き）
    pub fn insert(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        self.sites.insert(
            id.into(),
            SiteEntry {
                name: SiteName::new(name),
                host: Host::new(host),
            },
        );
        self
    }

    fn entry(&self, id: &SiteId) -> Result<&SiteEntry, Error> {
        self.sites
            .get(&**id)
            .ok_or_else(|| Error::invalid_argument(format!("unknown site id '{}'", id)))
    }
}

impl SiteRegistry for MemorySiteRegistry {
    fn site_name(&self, id: &SiteId) -> Result<SiteName, Error> {
        Ok(self.entry(id)?.name.clone())
    }

    fn site_host(&self, id: &SiteId) -> Result<Host, Error> {
        Ok(self.entry(id)?.host.clone())
    }
}
