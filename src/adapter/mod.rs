//! アダプター（外界の I/O の標準実装・ファイル実装・メモリ実装）
//!
//! 利用側は `ports::outbound` の trait 経由でのみプロセス・FS・環境変数・
//! 設定ストアに触れる。ここの実装（Std* / File* / Memory*）を注入する。

pub mod file_json_log;
pub mod file_site_registry;
pub mod logging_process;
pub mod memory_config_store;
pub mod memory_site_registry;
pub mod std_clock;
pub mod std_env_probe;
pub mod std_fs;
pub mod std_process;
pub mod stdin_prompt;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use file_site_registry::FileSiteRegistry;
pub use logging_process::LoggingProcess;
pub use memory_config_store::MemoryConfigStore;
pub use memory_site_registry::MemorySiteRegistry;
pub use std_clock::StdClock;
pub use std_env_probe::StdEnvProbe;
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
pub use stdin_prompt::{NoPrompt, StdinPrompt};
