use serenity::async_trait;
use serenity::builder::CreateEmbed;
use serenity::model::id::ChannelId;

/// Interface for sending output to Discord channels
#[async_trait]
pub trait DiscordService: Send + Sync {
    /// Send a plain text message to a channel
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The destination channel
    /// * `content` - The message content
    async fn send_message(&self, channel_id: ChannelId, content: &str)
    -> Result<(), serenity::Error>;

    /// Send an embed to a channel
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The destination channel
    /// * `embed` - The embed to send
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        embed: CreateEmbed,
    ) -> Result<(), serenity::Error>;
}
