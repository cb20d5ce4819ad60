use thiserror::Error;

/// Failure to turn one URL into a record. Always local to that URL.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("no info table on page")]
    NoInfoTable,
}
