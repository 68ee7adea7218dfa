use super::mention::{MentionKind, candidate_ids, matches_normalized, normalize, parse_id};
use super::message_scope::MessageScope;
use crate::adapters::GuildDirectory;
use anyhow::Context as _;
use serenity::model::channel::{GuildChannel, Message};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Resolve user-supplied tokens to guild entities
///
/// Every lookup tries, in order:
/// 1. the mention markup of the entity kind,
/// 2. a bare numeric ID,
/// 3. a scan of the guild comparing normalized names.
///
/// The first strategy that yields an entity wins, so an explicit mention or
/// ID can never be shadowed by an entity whose name happens to match.
pub struct EntityResolver<D>
where
    D: GuildDirectory,
{
    directory: Arc<D>,
    fetch_timeout: Duration,
}

impl<D> EntityResolver<D>
where
    D: GuildDirectory,
{
    /// Create a new EntityResolver
    ///
    /// # Arguments
    ///
    /// * `directory` - The guild directory to search
    /// * `fetch_timeout` - Upper bound for each message fetch
    pub fn new(directory: Arc<D>, fetch_timeout: Duration) -> Self {
        Self {
            directory,
            fetch_timeout,
        }
    }

    /// Resolve a guild member from a mention, an ID, or a name
    ///
    /// Names are compared against the nickname, the username, the global
    /// display name and the `name#discriminator` tag.
    pub async fn resolve_user(
        &self,
        token: &str,
        guild_id: GuildId,
    ) -> anyhow::Result<Option<Member>> {
        for id in candidate_ids(token, MentionKind::User) {
            let member = self
                .directory
                .member(guild_id, UserId::new(id))
                .await
                .context("Failed to look up member by ID")?;

            if let Some(member) = member {
                debug!(%guild_id, user_id = %member.user.id, "Resolved member by ID");
                return Ok(Some(member));
            }
        }

        let needle = normalize(token);
        let members = self
            .directory
            .members(guild_id)
            .await
            .context("Failed to list guild members")?;

        Ok(members
            .into_iter()
            .find(|member| member_matches(member, &needle)))
    }

    /// Resolve a role from a mention, an ID, or a name
    ///
    /// Without a guild there is nothing to search and the result is `None`.
    pub async fn resolve_role(
        &self,
        token: &str,
        guild_id: Option<GuildId>,
    ) -> anyhow::Result<Option<Role>> {
        let Some(guild_id) = guild_id else {
            return Ok(None);
        };

        for id in candidate_ids(token, MentionKind::Role) {
            let role = self
                .directory
                .role(guild_id, RoleId::new(id))
                .await
                .context("Failed to look up role by ID")?;

            if let Some(role) = role {
                debug!(%guild_id, role_id = %role.id, "Resolved role by ID");
                return Ok(Some(role));
            }
        }

        let needle = normalize(token);
        let roles = self
            .directory
            .roles(guild_id)
            .await
            .context("Failed to list guild roles")?;

        Ok(roles
            .into_iter()
            .find(|role| matches_normalized(&needle, &role.name)))
    }

    /// Resolve a text channel from a mention, an ID, or a name
    pub async fn resolve_text_channel(
        &self,
        token: &str,
        guild_id: GuildId,
    ) -> anyhow::Result<Option<GuildChannel>> {
        for id in candidate_ids(token, MentionKind::Channel) {
            let channel = self
                .directory
                .text_channel(guild_id, ChannelId::new(id))
                .await
                .context("Failed to look up channel by ID")?;

            if let Some(channel) = channel {
                debug!(%guild_id, channel_id = %channel.id, "Resolved channel by ID");
                return Ok(Some(channel));
            }
        }

        let needle = normalize(token);
        let channels = self
            .directory
            .text_channels(guild_id)
            .await
            .context("Failed to list guild channels")?;

        Ok(channels
            .into_iter()
            .find(|channel| matches_normalized(&needle, &channel.name)))
    }

    /// Resolve a message from its numeric ID
    ///
    /// The message is first fetched from the scope channel. In a guild, every
    /// other text channel is then searched in turn; channels that fail (missing
    /// permissions, timeouts) are skipped. Direct-message scopes are never
    /// searched beyond their own channel.
    pub async fn resolve_message(&self, token: &str, scope: MessageScope) -> Option<Message> {
        let message_id = MessageId::new(parse_id(token)?);

        if let Some(message) = self.fetch_message(scope.channel_id, message_id).await {
            return Some(message);
        }

        let guild_id = scope.guild_id?;

        let channels = match timeout(self.fetch_timeout, self.directory.text_channels(guild_id)).await
        {
            Ok(Ok(channels)) => channels,
            Ok(Err(err)) => {
                warn!(?err, %guild_id, "Failed to list channels for message search");
                return None;
            }
            Err(_) => {
                warn!(%guild_id, "Timed out listing channels for message search");
                return None;
            }
        };

        for channel in channels
            .iter()
            .filter(|channel| channel.id != scope.channel_id)
        {
            if let Some(message) = self.fetch_message(channel.id, message_id).await {
                debug!(
                    %message_id,
                    channel_id = %channel.id,
                    "Found message outside of the requesting channel"
                );
                return Some(message);
            }
        }

        None
    }

    /// Fetch one message, treating errors and timeouts as absence
    async fn fetch_message(&self, channel_id: ChannelId, message_id: MessageId) -> Option<Message> {
        match timeout(
            self.fetch_timeout,
            self.directory.message(channel_id, message_id),
        )
        .await
        {
            Ok(Ok(message)) => message,
            Ok(Err(err)) => {
                debug!(?err, %channel_id, %message_id, "Message fetch failed, skipping channel");
                None
            }
            Err(_) => {
                debug!(%channel_id, %message_id, "Message fetch timed out, skipping channel");
                None
            }
        }
    }
}

fn member_matches(member: &Member, needle: &str) -> bool {
    let user = &member.user;

    member
        .nick
        .as_deref()
        .is_some_and(|nick| matches_normalized(needle, nick))
        || matches_normalized(needle, &user.name)
        || user
            .global_name
            .as_deref()
            .is_some_and(|name| matches_normalized(needle, name))
        || matches_normalized(needle, &user.tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serenity::model::user::User;

    fn member(name: &str, nick: Option<&str>, global_name: Option<&str>) -> Member {
        let mut user = User::default();
        user.name = name.to_string();
        user.global_name = global_name.map(str::to_string);

        let mut member = Member::default();
        member.user = user;
        member.nick = nick.map(str::to_string);
        member
    }

    #[rstest]
    #[case::username("alice", true)]
    #[case::username_cased("ALICE", true)]
    #[case::nickname("Wonder Land", true)]
    #[case::global_name("Alice In Chains", true)]
    #[case::other("bob", false)]
    #[case::substring("ali", false)]
    fn test_member_matches(#[case] token: &str, #[case] expected: bool) {
        let member = member("alice", Some("wonder-land"), Some("Alice in Chains"));
        assert_eq!(member_matches(&member, &normalize(token)), expected);
    }
}
