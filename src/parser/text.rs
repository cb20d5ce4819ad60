use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Each descendant text node trimmed, empty ones dropped, the rest concatenated.
pub fn stripped(el: ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Like [`stripped`] but with `sep` between text nodes.
pub fn joined(el: ElementRef, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Collapse whitespace runs (newlines, tabs, nbsp) to a single space and trim.
pub fn collapse_ws(s: &str) -> String {
    WS_RE.replace_all(s.trim(), " ").into_owned()
}
