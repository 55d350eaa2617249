//! Outbound ポート: 外界（プロセス・FS・環境変数・設定ストア・時刻）を使うための trait

pub mod clock;
pub mod config_store;
pub mod env_probe;
pub mod fs;
pub mod log;
pub mod process;
pub mod prompt;
pub mod site_registry;

pub use clock::Clock;
pub use config_store::ConfigStore;
pub use env_probe::EnvProbe;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use process::Process;
pub use prompt::Prompt;
pub use site_registry::{site_name_for, SiteRegistry};
