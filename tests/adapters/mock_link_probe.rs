use discord_utils::adapters::LinkProbe;
use serenity::async_trait;
use std::sync::{Arc, Mutex};
use url::Url;

/// Link probe answering every request with the same outcome
pub struct MockLinkProbe {
    status: Option<u16>,
    pub probed: Arc<Mutex<Vec<String>>>,
}

impl MockLinkProbe {
    /// Every probe returns `status`
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            probed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every probe fails like a network error
    pub fn failing() -> Self {
        Self {
            status: None,
            probed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkProbe for MockLinkProbe {
    async fn head(&self, url: Url) -> anyhow::Result<u16> {
        self.probed.lock().unwrap().push(url.to_string());
        self.status
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}
