//! 実行環境検出 Outbound ポート
//!
//! CLI 実行か否かの判定と、環境変数のデフォルト付き参照を trait で抽象化する。

/// 実行環境検出の抽象
///
/// 実装は `crate::adapter::StdEnvProbe` やテスト用の固定値など。
pub trait EnvProbe: Send + Sync {
    /// 端末（CLI）から実行されているか
    ///
    /// Web サーバ配下での実行と区別するための判定。
    fn is_cli(&self) -> bool;

    /// 環境変数 name の値を返す。未設定または空なら default を返す
    fn var_or(&self, name: &str, default: &str) -> String;
}
