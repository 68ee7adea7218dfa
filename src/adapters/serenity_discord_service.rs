use super::discord_service::DiscordService;
use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;

/// Implementation for Discord operations via Serenity
pub struct SerenityDiscordService {
    http: Arc<Http>,
}

impl SerenityDiscordService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordService for SerenityDiscordService {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<(), serenity::Error> {
        let builder = CreateMessage::new().content(content);

        channel_id.send_message(&self.http, builder).await?;
        Ok(())
    }

    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<(), serenity::Error> {
        let builder = CreateMessage::new().embed(embed);

        channel_id.send_message(&self.http, builder).await?;
        Ok(())
    }
}
