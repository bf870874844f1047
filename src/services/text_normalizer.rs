//! 文本清洗 - 业务能力层
//!
//! 无状态，所有函数对任意输入都返回结果

use phf::phf_set;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static ENTITY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*)(;?)")
        .expect("entity pattern is valid")
});

/// 允许省略结尾分号的旧式实体名（HTML5 规定的 legacy 列表）
static LEGACY_ENTITIES: phf::Set<&'static str> = phf_set! {
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml",
    "COPY", "Ccedil", "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT",
    "Iacute", "Icirc", "Igrave", "Iuml", "LT", "Ntilde", "Oacute", "Ocirc",
    "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN", "Uacute",
    "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil",
    "cent", "copy", "curren", "deg", "divide", "eacute", "ecirc", "egrave",
    "eth", "euml", "frac12", "frac14", "frac34", "gt", "iacute", "icirc",
    "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot",
    "raquo", "reg", "sect", "shy", "sup1", "sup2", "sup3", "szlig",
    "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml", "yacute",
    "yen", "yuml",
};

/// 解码 HTML 实体并把连续空白（含换行、不间断空格）压缩为单个空格
///
/// 只解码一层实体，`&amp;nbsp;` 会得到字面量 `&nbsp;`。
/// 数字实体和旧式实体名（`&amp`、`&lt`、`&copy` ……）缺少分号时也会解码，
/// 与浏览器的行为一致
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(raw);
    WHITESPACE_RUN.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(raw: &str) -> String {
    ENTITY_REF
        .replace_all(raw, |caps: &Captures| decode_reference(caps))
        .into_owned()
}

fn decode_reference(caps: &Captures) -> String {
    let original = &caps[0];
    let name = &caps[1];
    let terminated = !caps[2].is_empty();

    let closed = format!("&{};", name);
    let decoded = html_escape::decode_html_entities(&closed);
    if decoded != closed && (terminated || name.starts_with('#')) {
        return decoded.into_owned();
    }

    // 未识别的实体，或缺少分号的命名实体：取最长的旧式实体名前缀
    let Some(prefix) = (1..=name.len())
        .rev()
        .map(|len| &name[..len])
        .find(|candidate| LEGACY_ENTITIES.contains(candidate))
    else {
        return original.to_string();
    };

    let mut out = html_escape::decode_html_entities(&format!("&{};", prefix)).into_owned();
    out.push_str(&original[prefix.len() + 1..]);
    out
}

/// 预格式化块：逐行去掉首尾空白，丢弃空行，再用换行拼回
pub fn clean_pre_block(raw: &str) -> String {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
