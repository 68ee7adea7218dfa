use discord_utils::adapters::GuildDirectory;
use serenity::async_trait;
use serenity::model::channel::{GuildChannel, Message};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory guild for resolver tests
///
/// Every call is recorded so tests can check which strategies ran.
#[derive(Default)]
pub struct MockGuildDirectory {
    members: Vec<Member>,
    roles: Vec<Role>,
    channels: Vec<GuildChannel>,
    messages: HashMap<(ChannelId, MessageId), Message>,
    failing_channels: HashSet<ChannelId>,
    slow_channels: HashSet<ChannelId>,
    failing_members: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockGuildDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_channels(mut self, channels: Vec<GuildChannel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages
            .insert((message.channel_id, message.id), message);
        self
    }

    /// Message fetches in this channel fail like a permission error
    pub fn failing_channel(mut self, channel_id: u64) -> Self {
        self.failing_channels.insert(ChannelId::new(channel_id));
        self
    }

    /// Message fetches in this channel never complete in time
    pub fn slow_channel(mut self, channel_id: u64) -> Self {
        self.slow_channels.insert(ChannelId::new(channel_id));
        self
    }

    /// Listing members fails like a missing intent
    pub fn failing_members(mut self) -> Self {
        self.failing_members = true;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GuildDirectory for MockGuildDirectory {
    async fn member(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Member>, serenity::Error> {
        self.record(format!("member:{user_id}"));
        Ok(self
            .members
            .iter()
            .find(|member| member.user.id == user_id)
            .cloned())
    }

    async fn members(&self, _guild_id: GuildId) -> Result<Vec<Member>, serenity::Error> {
        self.record("members".to_string());
        if self.failing_members {
            return Err(serenity::Error::Other("Missing Access"));
        }
        Ok(self.members.clone())
    }

    async fn role(
        &self,
        _guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<Role>, serenity::Error> {
        self.record(format!("role:{role_id}"));
        Ok(self.roles.iter().find(|role| role.id == role_id).cloned())
    }

    async fn roles(&self, _guild_id: GuildId) -> Result<Vec<Role>, serenity::Error> {
        self.record("roles".to_string());
        Ok(self.roles.clone())
    }

    async fn text_channel(
        &self,
        _guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<Option<GuildChannel>, serenity::Error> {
        self.record(format!("text_channel:{channel_id}"));
        Ok(self
            .channels
            .iter()
            .find(|channel| channel.id == channel_id)
            .cloned())
    }

    async fn text_channels(
        &self,
        _guild_id: GuildId,
    ) -> Result<Vec<GuildChannel>, serenity::Error> {
        self.record("text_channels".to_string());
        Ok(self.channels.clone())
    }

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Message>, serenity::Error> {
        self.record(format!("message:{channel_id}"));

        if self.slow_channels.contains(&channel_id) {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        if self.failing_channels.contains(&channel_id) {
            return Err(serenity::Error::Other("Missing Access"));
        }

        Ok(self.messages.get(&(channel_id, message_id)).cloned())
    }
}
