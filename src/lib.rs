//! webutil — Web アプリ共通ユーティリティ
//!
//! サブプロセス実行・HTML エスケープ・リダイレクトヘッダ構築・
//! 日時の解析/整形・タイムゾーン解決などを提供します。
//! 外界（プロセス・FS・環境変数・設定ストア）へのアクセスはすべて
//! Outbound ポート（trait）経由で、暗黙のグローバル状態は持ちません。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// アダプター（標準実装・ファイル実装・メモリ実装）
pub mod adapter;

/// HTML エスケープとマップのデフォルト付き参照
pub mod escape;

/// HTTP リダイレクトヘッダの構築
pub mod web;

/// 日時の解析と整形（chrono の薄いラッパ）
pub mod timefmt;

/// タイムゾーン解決チェーン（セッション → ユーザー設定 → 全体設定 → UTC）
pub mod timezone;

/// セッションコンテキスト（呼び出し元が明示的に渡す値）
pub mod session;
