//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// ユーザー ID
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for UserId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// サイト ID（サイトレジストリのキー）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for SiteId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SiteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// サイトの表示名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteName(String);

impl SiteName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for SiteName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for SiteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SiteName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// サイトのホスト名（例: clinic.example.org）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for Host {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Host {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// IANA 形式のタイムゾーン名（例: Asia/Tokyo）
///
/// ここでは名前を運ぶだけで、実在するゾーンかの検証は行わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneName(String);

impl TimeZoneName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 空文字列は「未設定」として扱う
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for TimeZoneName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for TimeZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TimeZoneName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// サブプロセス 1 回分の起動指定
///
/// 呼び出し直前に組み立てて `Process::run` に渡す値。永続化しない。
/// 実行中に書き換わらないことだけが不変条件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// 実行するプログラムのパス
    pub program: PathBuf,
    /// 子プロセスへ渡す引数ベクタ（argv[0] は含めない。プラットフォームが
    /// プログラムパスから補う）
    pub args: Vec<String>,
    /// 子プロセスへ渡す環境変数。空マップは「呼び出し元の環境をそのまま
    /// 継承する」の意味（StdProcess のドキュメント参照）
    pub env: BTreeMap<String, String>,
}

impl ProcessSpec {
    /// 引数・環境変数なしの指定を作る
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// 引数を 1 つ追加する
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// 環境変数を 1 つ追加する
    pub fn env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// プログラムパス
    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_spec_builder() {
        let spec = ProcessSpec::new("/bin/sh")
            .arg("-c")
            .arg("exit 0")
            .env_var("LANG", "C");
        assert_eq!(spec.program(), Path::new("/bin/sh"));
        assert_eq!(spec.args, vec!["-c".to_string(), "exit 0".to_string()]);
        assert_eq!(spec.env.get("LANG").map(String::as_str), Some("C"));
    }

    #[test]
    fn test_timezone_name_empty() {
        assert!(TimeZoneName::new("").is_empty());
        assert!(!TimeZoneName::new("UTC").is_empty());
    }
}
