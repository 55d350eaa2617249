//! sites.json を読むサイトレジストリ実装
//!
//! 形式: `{ "<site-id>": { "name": "...", "host": "..." }, ... }`
//! 読み込みは生成時の 1 回のみ。以後の参照はメモリから返す。

use crate::domain::{Host, SiteId, SiteName};
use crate::error::Error;
use crate::ports::outbound::{FileSystem, SiteRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
struct RawSiteEntry {
    name: String,
    host: String,
}

/// sites.json を実体とする SiteRegistry 実装
#[derive(Debug)]
pub struct FileSiteRegistry {
    sites: BTreeMap<String, RawSiteEntry>,
}

impl FileSiteRegistry {
    /// path の JSON を読み込んでレジストリを作る
    pub fn load(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs.read_to_string(path)?;
        let sites: BTreeMap<String, RawSiteEntry> = serde_json::from_str(&contents)
            .map_err(|e| Error::Json(format!("{}: {}", path.display(), e)))?;
        Ok(Self { sites })
    }

    fn entry(&self, id: &SiteId) -> Result<&RawSiteEntry, Error> {
        self.sites
            .get(&**id)
            .ok_or_else(|| Error::invalid_argument(format!("unknown site id '{}'", id)))
    }
}

impl SiteRegistry for FileSiteRegistry {
    fn site_name(&self, id: &SiteId) -> Result<SiteName, Error> {
        Ok(SiteName::new(self.entry(id)?.name.clone()))
    }

    fn site_host(&self, id: &SiteId) -> Result<Host, Error> {
        Ok(Host::new(self.entry(id)?.host.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;

    #[test]
    fn test_load_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        std::fs::write(
            &path,
            r#"{ "default": { "name": "Main Clinic", "host": "clinic.example.org" } }"#,
        )
        .unwrap();

        let reg = FileSiteRegistry::load(Arc::new(StdFileSystem), &path).unwrap();
        let id = SiteId::new("default");
        assert_eq!(&*reg.site_name(&id).unwrap(), "Main Clinic");
        assert_eq!(&*reg.site_host(&id).unwrap(), "clinic.example.org");
    }

    #[test]
    fn test_broken_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileSiteRegistry::load(Arc::new(StdFileSystem), &path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileSiteRegistry::load(Arc::new(StdFileSystem), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
