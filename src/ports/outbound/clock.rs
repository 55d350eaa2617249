//! 時刻取得 Outbound ポート
//!
//! 「現在時刻」の取得を trait 経由にして、整形ヘルパーをテスト可能に保つ。

/// 時刻取得の抽象
///
/// 実装は `crate::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
