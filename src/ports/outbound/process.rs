//! サブプロセス実行 Outbound ポート
//!
//! 外部コマンドの同期実行を trait で抽象化する。呼び出しスレッドは
//! 子プロセスの終了までブロックする（他スレッドは影響を受けない）。

use crate::domain::ProcessSpec;
use crate::error::Error;

/// サブプロセス実行の抽象
///
/// 実装は `crate::adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// spec に従って子プロセスを 1 つ起動し、終了を待つ
    ///
    /// 正常終了なら終了コード（0〜255）を返す。生成失敗・待機失敗・
    /// 異常終了（シグナルによる停止など）はすべて `Error::Process` に
    /// 畳んで返す。リトライ・タイムアウト・キャンセルは行わない。
    fn run(&self, spec: &ProcessSpec) -> Result<i32, Error>;
}
