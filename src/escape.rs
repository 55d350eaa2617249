//! HTML エスケープとマップのデフォルト付き参照

use std::collections::BTreeMap;

/// HTML 特殊文字をエスケープする
///
/// 対象: `&` `<` `>` `"` `'` の 5 文字。冪等ではない（2 回かければ
/// 2 重にエスケープされる）。
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 属性値コンテキスト用エスケープ
///
/// テキストと同じ 5 文字の変換表を使う（属性値も必ず引用符で括る前提）。
pub fn escape_attr(input: &str) -> String {
    escape_html(input)
}

/// map から key の値を引く。無ければ default を返す
pub fn get_or<'a>(map: &'a BTreeMap<String, String>, key: &str, default: &'a str) -> &'a str {
    map.get(key).map(String::as_str).unwrap_or(default)
}

/// map から key の値を String で引く。無ければ default をコピーして返す
pub fn get_owned_or(map: &BTreeMap<String, String>, key: &str, default: &str) -> String {
    map.get(key).cloned().unwrap_or_else(|| default.to_string())
}
