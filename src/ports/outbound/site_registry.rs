//! サイトレジストリ Outbound ポート
//!
//! サイト ID から表示名・ホスト名を引く。レジストリの実体（ファイル・
//! メモリ）はアダプター側が持つ。

use crate::domain::{Host, SiteId, SiteName};
use crate::error::Error;
use crate::session::Session;

/// サイトレジストリの抽象
///
/// 実装は `crate::adapter::FileSiteRegistry`（sites.json）や
/// `crate::adapter::MemorySiteRegistry`（テスト・組み込み用）など。
pub trait SiteRegistry: Send + Sync {
    /// サイトの表示名。未知の ID は `Error::InvalidArgument`
    fn site_name(&self, id: &SiteId) -> Result<SiteName, Error>;

    /// サイトのホスト名。未知の ID は `Error::InvalidArgument`
    fn site_host(&self, id: &SiteId) -> Result<Host, Error>;
}

/// セッションが属するサイトの表示名を引く
pub fn site_name_for(session: &Session, registry: &dyn SiteRegistry) -> Result<SiteName, Error> {
    registry.site_name(&session.site)
}
