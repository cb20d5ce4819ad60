use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PREFIX: &str = "https://masothue.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: i64 = 30;
const DEFAULT_DELAY_SECS: i64 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Only lines starting with this are crawled.
    pub url_prefix: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Pause between two consecutive requests.
    pub delay_secs: u64,
}

impl Settings {
    /// Defaults, then `masothue.{toml,json,yaml}` if present, then `MASOTHUE_*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            Config::builder()
                .add_source(File::with_name("masothue").required(false))
                .add_source(Environment::with_prefix("MASOTHUE").try_parsing(true)),
        )
    }

    /// Deserialize `builder`'s sources layered over the built-in defaults.
    pub fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("url_prefix", DEFAULT_PREFIX)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("delay_secs", DEFAULT_DELAY_SECS)?
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url_prefix: DEFAULT_PREFIX.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS as u64,
            delay_secs: DEFAULT_DELAY_SECS as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.url_prefix, "https://masothue.com");
        assert_eq!(s.timeout(), Duration::from_secs(30));
        assert_eq!(s.delay(), Duration::from_secs(2));
        assert!(s.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn no_sources_gives_defaults() {
        let s = Settings::from_sources(Config::builder()).unwrap();
        let d = Settings::default();
        assert_eq!(s.url_prefix, d.url_prefix);
        assert_eq!(s.user_agent, d.user_agent);
        assert_eq!(s.timeout_secs, d.timeout_secs);
        assert_eq!(s.delay_secs, d.delay_secs);
    }

    #[test]
    fn source_overrides_defaults() {
        let toml = "delay_secs = 5\nurl_prefix = \"https://masothue.vn\"";
        let s = Settings::from_sources(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap();
        assert_eq!(s.delay(), Duration::from_secs(5));
        assert_eq!(s.url_prefix, "https://masothue.vn");
        assert_eq!(s.timeout_secs, 30);
    }
}
