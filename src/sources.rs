use std::collections::HashMap;
use std::path::Path;

use tracing::{error, info, warn};

/// A URL line seen again after its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub url: String,
    pub first_line: usize,
    pub line: usize,
}

/// A non-comment line that does not point at the target site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlList {
    /// Unique URLs in first-seen order.
    pub urls: Vec<String>,
    pub duplicates: Vec<Duplicate>,
    pub skipped: Vec<Skipped>,
}

impl UrlList {
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Every accepted line, repeats included.
    pub fn total(&self) -> usize {
        self.urls.len() + self.duplicates.len()
    }
}

/// Read a URL list from disk. A missing or unreadable file yields an empty list.
pub fn load(path: &Path, prefix: &str) -> UrlList {
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text, prefix),
        Err(e) => {
            error!("Cannot read URL list {}: {}", path.display(), e);
            UrlList::default()
        }
    }
}

/// Filter and deduplicate newline-delimited URLs. Line numbers are 1-based.
pub fn parse(text: &str, prefix: &str) -> UrlList {
    let mut list = UrlList::default();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.starts_with(prefix) {
            warn!("Skipping invalid URL (line {}): {}", line_no, line);
            list.skipped.push(Skipped {
                line: line_no,
                text: line.to_string(),
            });
            continue;
        }
        match first_seen.get(line) {
            Some(&first_line) => {
                warn!("Duplicate URL (line {}): {}", line_no, line);
                list.duplicates.push(Duplicate {
                    url: line.to_string(),
                    first_line,
                    line: line_no,
                });
            }
            None => {
                first_seen.insert(line, line_no);
                list.urls.push(line.to_string());
            }
        }
    }

    if !list.duplicates.is_empty() {
        info!("Removed {} duplicate URLs", list.duplicates.len());
    }
    list
}
