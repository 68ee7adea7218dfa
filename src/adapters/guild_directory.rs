use serenity::async_trait;
use serenity::model::channel::{GuildChannel, Message};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

/// Read-only view of the entities of a guild
///
/// Lookups by ID return `Ok(None)` when the entity does not exist; `Err` is
/// reserved for transport or permission failures.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Look up a guild member by user ID
    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Member>, serenity::Error>;

    /// List every member of a guild
    async fn members(&self, guild_id: GuildId) -> Result<Vec<Member>, serenity::Error>;

    /// Look up a role by ID
    async fn role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<Role>, serenity::Error>;

    /// List every role of a guild
    async fn roles(&self, guild_id: GuildId) -> Result<Vec<Role>, serenity::Error>;

    /// Look up a text channel of the guild by ID
    ///
    /// Channels of another kind or belonging to another guild are `None`.
    async fn text_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<Option<GuildChannel>, serenity::Error>;

    /// List the text channels of a guild
    async fn text_channels(&self, guild_id: GuildId)
    -> Result<Vec<GuildChannel>, serenity::Error>;

    /// Fetch a message from a channel
    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Message>, serenity::Error>;
}
