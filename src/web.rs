//! HTTP リダイレクトヘッダの構築
//!
//! ソケット I/O は行わない。ヘッダの組（ステータス行相当の情報と
//! ヘッダフィールド）を組み立てて返すだけで、送出は呼び出し側の責務。

use crate::error::Error;

/// リダイレクトに使える HTTP ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    MovedPermanently,
    Found,
    SeeOther,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectStatus {
    /// ステータスコード（301 / 302 / 303 / 307 / 308）
    pub fn code(self) -> u16 {
        match self {
            RedirectStatus::MovedPermanently => 301,
            RedirectStatus::Found => 302,
            RedirectStatus::SeeOther => 303,
            RedirectStatus::TemporaryRedirect => 307,
            RedirectStatus::PermanentRedirect => 308,
        }
    }

    /// 理由句（"Found" など）
    pub fn reason(self) -> &'static str {
        match self {
            RedirectStatus::MovedPermanently => "Moved Permanently",
            RedirectStatus::Found => "Found",
            RedirectStatus::SeeOther => "See Other",
            RedirectStatus::TemporaryRedirect => "Temporary Redirect",
            RedirectStatus::PermanentRedirect => "Permanent Redirect",
        }
    }
}

/// 組み立て済みのリダイレクト応答ヘッダ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: RedirectStatus,
    /// (フィールド名, 値) の列。Location と Content-Length を含む
    pub headers: Vec<(String, String)>,
}

/// 302 Found のリダイレクトを組み立てる
pub fn redirect(url: &str) -> Result<Redirect, Error> {
    redirect_with_status(url, RedirectStatus::Found)
}

/// 指定ステータスのリダイレクトを組み立てる
///
/// url が空、または CR / LF を含む（ヘッダインジェクション）場合は
/// `Error::InvalidArgument`。
pub fn redirect_with_status(url: &str, status: RedirectStatus) -> Result<Redirect, Error> {
    if url.is_empty() {
        return Err(Error::invalid_argument("redirect url is empty"));
    }
    if url.contains('\r') || url.contains('\n') {
        return Err(Error::invalid_argument(
            "redirect url contains CR/LF (header injection)",
        ));
    }

    Ok(Redirect {
        status,
        headers: vec![
            ("Location".to_string(), url.to_string()),
            ("Content-Length".to_string(), "0".to_string()),
        ],
    })
}
