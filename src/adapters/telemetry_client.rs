use anyhow::Context as _;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Best-effort client reporting bot statistics to a listing website
///
/// Every request is a form-encoded `POST` carrying the authentication token,
/// the bot name and one field. Failures never reach the caller.
pub struct TelemetryClient {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
    bot_name: String,
}

impl TelemetryClient {
    /// Create a new TelemetryClient
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The website endpoint receiving updates
    /// * `token` - Authentication token sent with every update
    /// * `bot_name` - Name of the bot sent with every update
    /// * `timeout` - Total request timeout
    pub fn new(endpoint: Url, token: String, bot_name: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self {
            client,
            endpoint,
            token,
            bot_name,
        })
    }

    /// Form fields sent for a single update
    pub fn form_fields<'a>(&'a self, field: &'a str, value: &'a str) -> [(&'a str, &'a str); 3] {
        [
            ("token", self.token.as_str()),
            ("name", self.bot_name.as_str()),
            (field, value),
        ]
    }

    /// Send one field to the website, discarding any failure
    pub async fn update(&self, field: &str, value: &str) {
        let result = self
            .client
            .post(self.endpoint.clone())
            .form(&self.form_fields(field, value))
            .send()
            .await;

        match result {
            Ok(response) => {
                debug!(status = %response.status(), %field, "Sent telemetry update");
            }
            Err(err) => {
                debug!(?err, %field, endpoint = %self.endpoint, "Telemetry update failed");
            }
        }
    }

    /// Run [`TelemetryClient::update`] on a detached task
    pub fn spawn_update(self: &Arc<Self>, field: String, value: String) {
        let client = Arc::clone(self);
        tokio::spawn(async move {
            client.update(&field, &value).await;
        });
    }
}
