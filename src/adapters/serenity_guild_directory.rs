use super::guild_directory::GuildDirectory;
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::{Channel, ChannelType, GuildChannel, Message};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use std::sync::Arc;
use tracing::debug;

/// Page size of the guild member listing endpoint
const MEMBERS_PAGE_SIZE: u64 = 1000;

/// Guild lookups via Serenity
///
/// Uses cache-first approach with API fallback.
pub struct SerenityGuildDirectory {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGuildDirectory {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

/// Text and announcement channels can hold messages
pub fn is_text_channel(channel: &GuildChannel) -> bool {
    matches!(channel.kind, ChannelType::Text | ChannelType::News)
}

/// Convert a 404 from the Discord API into `Ok(None)`
fn not_found_as_none<T>(result: Result<T, serenity::Error>) -> Result<Option<T>, serenity::Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(serenity::Error::Http(err))
            if err.status_code().is_some_and(|status| status.as_u16() == 404) =>
        {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[async_trait]
impl GuildDirectory for SerenityGuildDirectory {
    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Member>, serenity::Error> {
        let cached = self
            .cache
            .member(guild_id, user_id)
            .map(|member| Member::clone(&member));

        if cached.is_some() {
            return Ok(cached);
        }

        debug!(%guild_id, %user_id, "Cache miss, fetching member from API");
        not_found_as_none(self.http.get_member(guild_id, user_id).await)
    }

    async fn members(&self, guild_id: GuildId) -> Result<Vec<Member>, serenity::Error> {
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(guild_id, Some(MEMBERS_PAGE_SIZE), after)
                .await?;
            let page_len = page.len();
            after = page.last().map(|member| member.user.id.get());
            members.extend(page);

            if (page_len as u64) < MEMBERS_PAGE_SIZE {
                break;
            }
        }

        debug!(%guild_id, count = members.len(), "Fetched guild members");
        Ok(members)
    }

    async fn role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
    ) -> Result<Option<Role>, serenity::Error> {
        let roles = self.roles(guild_id).await?;
        Ok(roles.into_iter().find(|role| role.id == role_id))
    }

    async fn roles(&self, guild_id: GuildId) -> Result<Vec<Role>, serenity::Error> {
        let cached: Option<Vec<Role>> = self
            .cache
            .guild(guild_id)
            .map(|guild| guild.roles.values().cloned().collect());

        match cached {
            Some(roles) => Ok(roles),
            None => {
                debug!(%guild_id, "Cache miss, fetching roles from API");
                self.http.get_guild_roles(guild_id).await
            }
        }
    }

    async fn text_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<Option<GuildChannel>, serenity::Error> {
        // Extract from cache without holding the guild reference across await points
        let cached: Option<Option<GuildChannel>> = self.cache.guild(guild_id).map(|guild| {
            guild
                .channels
                .get(&channel_id)
                .filter(|channel| is_text_channel(channel))
                .cloned()
        });

        if let Some(channel) = cached {
            return Ok(channel);
        }

        debug!(%guild_id, %channel_id, "Cache miss, fetching channel from API");
        let channel = not_found_as_none(self.http.get_channel(channel_id).await)?;

        Ok(match channel {
            Some(Channel::Guild(channel))
                if channel.guild_id == guild_id && is_text_channel(&channel) =>
            {
                Some(channel)
            }
            _ => None,
        })
    }

    async fn text_channels(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<GuildChannel>, serenity::Error> {
        let cached: Option<Vec<GuildChannel>> = self.cache.guild(guild_id).map(|guild| {
            guild
                .channels
                .values()
                .filter(|channel| is_text_channel(channel))
                .cloned()
                .collect()
        });

        let channels = match cached {
            Some(channels) => channels,
            None => {
                debug!(%guild_id, "Cache miss, fetching channels from API");
                self.http
                    .get_channels(guild_id)
                    .await?
                    .into_iter()
                    .filter(is_text_channel)
                    .collect()
            }
        };

        Ok(channels)
    }

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Message>, serenity::Error> {
        let cached = self
            .cache
            .message(channel_id, message_id)
            .map(|message| Message::clone(&message));

        if cached.is_some() {
            return Ok(cached);
        }

        not_found_as_none(self.http.get_message(channel_id, message_id).await)
    }
}
