use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::error::CrawlError;
use crate::fetch::Fetch;
use crate::parser;
use crate::record::CompanyRecord;

/// Counts returned after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    pub attempted: usize,
    pub ok: usize,
    pub failed: usize,
}

/// Sequential crawler. Owns the records collected during one run.
pub struct Crawler<F> {
    fetcher: F,
    delay: Duration,
    results: Vec<CompanyRecord>,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(fetcher: F, delay: Duration) -> Self {
        Crawler {
            fetcher,
            delay,
            results: Vec::new(),
        }
    }

    /// Fetch and extract a single page.
    pub fn crawl_one(&self, url: &str) -> Result<CompanyRecord, CrawlError> {
        let html = self.fetcher.fetch(url)?;
        parser::extract(&html, url).ok_or(CrawlError::NoInfoTable)
    }

    /// Crawl `urls` in order, pausing between requests. A failed URL is logged
    /// and skipped; it never stops the batch.
    pub fn crawl_all(&mut self, urls: &[String]) -> CrawlStats {
        let total = urls.len();
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=> "));
        }

        let mut stats = CrawlStats {
            attempted: 0,
            ok: 0,
            failed: 0,
        };

        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
            info!("[{}/{}] Crawling {}", i + 1, total, url);
            pb.set_message(url.clone());
            stats.attempted += 1;

            match self.crawl_one(url) {
                Ok(record) => {
                    info!("Crawled OK: {}", record.tax_code);
                    self.results.push(record);
                    stats.ok += 1;
                }
                Err(e) => {
                    warn!("Failed to crawl {}: {}", url, e);
                    stats.failed += 1;
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Crawled {}/{} companies", stats.ok, total);
        stats
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.results
    }
}
