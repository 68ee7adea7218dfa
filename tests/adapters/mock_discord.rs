use discord_utils::adapters::DiscordService;
use serenity::async_trait;
use serenity::builder::CreateEmbed;
use serenity::model::id::ChannelId;
use std::sync::{Arc, Mutex};

pub struct MockDiscordService {
    pub messages: Arc<Mutex<Vec<SentMessage>>>,
    pub embeds: Arc<Mutex<Vec<SentEmbed>>>,
    failing: bool,
}

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel_id: ChannelId,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct SentEmbed {
    pub channel_id: ChannelId,
    /// The embed serialized to JSON
    pub json: String,
}

impl Default for MockDiscordService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDiscordService {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            embeds: Arc::new(Mutex::new(Vec::new())),
            failing: false,
        }
    }

    /// Every send fails like a missing permission
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn get_messages(&self) -> Vec<SentMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn get_embeds(&self) -> Vec<SentEmbed> {
        self.embeds.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordService for MockDiscordService {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<(), serenity::Error> {
        if self.failing {
            return Err(serenity::Error::Other("Missing Permissions"));
        }
        self.messages.lock().unwrap().push(SentMessage {
            channel_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<(), serenity::Error> {
        if self.failing {
            return Err(serenity::Error::Other("Missing Permissions"));
        }
        let json = serde_json::to_string(&embed).expect("Failed to serialize embed");
        self.embeds
            .lock()
            .unwrap()
            .push(SentEmbed { channel_id, json });
        Ok(())
    }
}
