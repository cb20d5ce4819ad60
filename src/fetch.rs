use reqwest::blocking::Client;
use tracing::debug;

use crate::error::CrawlError;
use crate::settings::Settings;

/// Source of page HTML.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

/// Blocking HTTP GET with a browser user agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(CrawlError::Status { status: status.as_u16() });
        }
        Ok(response.text()?)
    }
}
