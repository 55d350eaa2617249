//! Ports & Adapters のポート定義
//!
//! - inbound: なし（webutil はライブラリのためアプリの入り口を持たない）
//! - outbound: アプリが外界に依頼するための trait

pub mod outbound;
