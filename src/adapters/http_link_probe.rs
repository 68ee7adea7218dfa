use super::link_probe::LinkProbe;
use anyhow::Context as _;
use serenity::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Implementation for probing links via HTTP
pub struct HttpLinkProbe {
    client: reqwest::Client,
}

impl HttpLinkProbe {
    /// Create a new HttpLinkProbe
    ///
    /// # Arguments
    ///
    /// * `user_agent` - Value of the `User-Agent` header
    /// * `timeout` - Total request timeout
    /// * `connect_timeout` - Connection timeout
    pub fn new(user_agent: &str, timeout: Duration, connect_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpLinkProbe {
    async fn head(&self, url: Url) -> anyhow::Result<u16> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .with_context(|| format!("HEAD request to {url} failed"))?;

        let status = response.status();
        debug!(%url, %status, "Probed link");

        Ok(status.as_u16())
    }
}
