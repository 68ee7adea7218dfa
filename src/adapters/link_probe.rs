use serenity::async_trait;
use url::Url;

/// Interface for probing a URL without downloading it
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Send a `HEAD` request and return the final status code
    ///
    /// # Returns
    ///
    /// * `Ok(status)` - The server answered
    /// * `Err(_)` - The request failed or timed out
    async fn head(&self, url: Url) -> anyhow::Result<u16>;
}
