use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::FetchError;

/// Single-shot page fetcher.
///
/// One call issues exactly one GET. The request and its body read race a
/// deadline; when the deadline wins the request future is dropped, which
/// closes the connection and frees the timer with it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Fetcher, FetchError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Fetcher {
            client,
            timeout: config.timeout,
        })
    }

    pub async fn fetch_markup(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("fetching {url}");
        let request = async {
            let res = self.client.get(url).send().await?;
            let status = res.status();
            if !status.is_success() {
                return Err(FetchError::Upstream {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok::<_, FetchError>(res.text().await?)
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(body)) => {
                log::debug!("fetched {} bytes from {url}", body.len());
                Ok(body)
            }
            Ok(Err(e)) => {
                log::debug!("fetch failed for {url}: {e}");
                Err(e)
            }
            Err(_) => Err(FetchError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }),
        }
    }
}
