use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://docs.rs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("docsrs-scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme and host of the documentation site, without a trailing slash.
    pub base_url: String,
    /// Wall-clock budget for one request, body included.
    pub timeout: Duration,
    pub user_agent: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            use_system_proxy: true,
        }
    }
}

impl Config {
    /// Build a config from the environment (a `.env` file is loaded if present).
    ///
    /// `DOCSRS_BASE_URL` points the scraper at a mirror, `DOCSRS_TIMEOUT_SECS`
    /// overrides the request budget and setting `DOCSRS_NO_PROXY` bypasses any
    /// system proxy.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        let timeout = match env::var("DOCSRS_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("invalid DOCSRS_TIMEOUT_SECS: {secs}"))?,
            ),
            Err(_) => DEFAULT_TIMEOUT,
        };
        Ok(Config {
            base_url: get_env_or_default("DOCSRS_BASE_URL", DEFAULT_BASE_URL),
            timeout,
            user_agent: USER_AGENT.to_string(),
            use_system_proxy: env::var_os("DOCSRS_NO_PROXY").is_none(),
        }
        .normalized())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Config {
        self.base_url = base_url.into();
        self.normalized()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Config {
        self.timeout = timeout;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Config {
        self.use_system_proxy = enabled;
        self
    }

    fn normalized(mut self) -> Config {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
