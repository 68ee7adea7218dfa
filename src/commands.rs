use crate::adapters::{DiscordService, GuildDirectory, LinkProbe};
use crate::embed::BotInfo;
use crate::format::text::{MESSAGE_MAX_LEN, truncate};
use crate::links::is_link_valid;
use crate::locale::LocaleTable;
use crate::resolver::{EntityResolver, MessageScope};
use anyhow::Context as _;
use chrono::Utc;
use serenity::model::channel::Message;
use std::sync::Arc;
use tracing::{debug, info};

/// A prefix command recognized by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Show the bot info embed
    Info,
    /// Look up a guild member
    Whois(&'a str),
    /// Look up a role
    Role(&'a str),
    /// Look up a text channel
    Channel(&'a str),
    /// Find a message by ID in the guild
    Quote(&'a str),
    /// Check that a link is reachable
    Link(&'a str),
}

impl<'a> Command<'a> {
    /// Parse `<prefix><name> <argument>`; unknown names are `None`
    ///
    /// Command names are case-insensitive and the argument is trimmed.
    pub fn parse(prefix: &str, content: &'a str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "info" => Command::Info,
            "whois" | "user" => Command::Whois(argument),
            "role" => Command::Role(argument),
            "channel" => Command::Channel(argument),
            "quote" => Command::Quote(argument),
            "link" => Command::Link(argument),
            _ => return None,
        };

        Some(command)
    }

    fn argument(&self) -> Option<&'a str> {
        match self {
            Command::Info => None,
            Command::Whois(argument)
            | Command::Role(argument)
            | Command::Channel(argument)
            | Command::Quote(argument)
            | Command::Link(argument) => Some(argument),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Info => "info",
            Command::Whois(_) => "whois",
            Command::Role(_) => "role",
            Command::Channel(_) => "channel",
            Command::Quote(_) => "quote",
            Command::Link(_) => "link",
        }
    }
}

/// Answer prefix commands using the lookup helpers
///
/// Replies are rendered through the locale table in the configured language.
pub struct CommandRouter<D, S, P>
where
    D: GuildDirectory,
    S: DiscordService,
    P: LinkProbe,
{
    resolver: EntityResolver<D>,
    discord_service: Arc<S>,
    link_probe: Arc<P>,
    locale: Arc<LocaleTable>,
    bot_info: BotInfo,
    prefix: String,
    language: Option<String>,
}

impl<D, S, P> CommandRouter<D, S, P>
where
    D: GuildDirectory,
    S: DiscordService,
    P: LinkProbe,
{
    /// Create a new CommandRouter
    ///
    /// # Arguments
    ///
    /// * `resolver` - Resolver for users, roles, channels and messages
    /// * `discord_service` - The Discord service used to reply
    /// * `link_probe` - The probe used by the link command
    /// * `locale` - Translation strings for replies
    /// * `bot_info` - Data for the info command
    /// * `prefix` - Command prefix
    /// * `language` - Reply language, English when `None`
    pub fn new(
        resolver: EntityResolver<D>,
        discord_service: Arc<S>,
        link_probe: Arc<P>,
        locale: Arc<LocaleTable>,
        bot_info: BotInfo,
        prefix: String,
        language: Option<String>,
    ) -> Self {
        Self {
            resolver,
            discord_service,
            link_probe,
            locale,
            bot_info,
            prefix,
            language,
        }
    }

    fn translate(&self, key: &str, args: &[&str]) -> String {
        self.locale.translate(self.language.as_deref(), key, args)
    }

    async fn reply(&self, message: &Message, content: &str) -> anyhow::Result<()> {
        self.discord_service
            .send_message(message.channel_id, &truncate(content, MESSAGE_MAX_LEN))
            .await
            .context("Failed to send reply to Discord")
    }

    /// Handle a message event
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The message was a command and has been answered
    /// * `Ok(false)` - The message is not a command
    /// * `Err(_)` - The command failed; the caller reports it to the user
    pub async fn handle_message(&self, message: &Message) -> anyhow::Result<bool> {
        let Some(command) = Command::parse(&self.prefix, &message.content) else {
            return Ok(false);
        };

        debug!(
            command = command.name(),
            message_id = %message.id,
            channel_id = %message.channel_id,
            "Processing command"
        );

        if command.argument().is_some_and(str::is_empty) {
            let reply = self.translate("missingArgument", &[command.name()]);
            self.reply(message, &reply).await?;
            return Ok(true);
        }

        match command {
            Command::Info => self.info(message).await?,
            Command::Whois(token) => self.whois(message, token).await?,
            Command::Role(token) => self.role(message, token).await?,
            Command::Channel(token) => self.channel(message, token).await?,
            Command::Quote(token) => self.quote(message, token).await?,
            Command::Link(url) => self.link(message, url).await?,
        }

        info!(
            command = command.name(),
            message_id = %message.id,
            "Successfully executed command"
        );

        Ok(true)
    }

    async fn info(&self, message: &Message) -> anyhow::Result<()> {
        self.discord_service
            .send_embed(message.channel_id, self.bot_info.embed(Utc::now()))
            .await
            .context("Failed to send bot info to Discord")
    }

    async fn whois(&self, message: &Message, token: &str) -> anyhow::Result<()> {
        let Some(guild_id) = message.guild_id else {
            return self.reply(message, &self.translate("guildOnly", &[])).await;
        };

        let reply = match self.resolver.resolve_user(token, guild_id).await? {
            Some(member) => {
                let tag = member.user.tag();
                let id = member.user.id.to_string();
                self.translate("userFound", &[tag.as_str(), id.as_str()])
            }
            None => self.translate("userNotFound", &[token]),
        };
        self.reply(message, &reply).await
    }

    async fn role(&self, message: &Message, token: &str) -> anyhow::Result<()> {
        let reply = match self.resolver.resolve_role(token, message.guild_id).await? {
            Some(role) => {
                let id = role.id.to_string();
                self.translate("roleFound", &[role.name.as_str(), id.as_str()])
            }
            None => self.translate("roleNotFound", &[token]),
        };
        self.reply(message, &reply).await
    }

    async fn channel(&self, message: &Message, token: &str) -> anyhow::Result<()> {
        let Some(guild_id) = message.guild_id else {
            return self.reply(message, &self.translate("guildOnly", &[])).await;
        };

        let reply = match self.resolver.resolve_text_channel(token, guild_id).await? {
            Some(channel) => {
                let id = channel.id.to_string();
                self.translate("channelFound", &[channel.name.as_str(), id.as_str()])
            }
            None => self.translate("channelNotFound", &[token]),
        };
        self.reply(message, &reply).await
    }

    async fn quote(&self, message: &Message, token: &str) -> anyhow::Result<()> {
        let reply = match self
            .resolver
            .resolve_message(token, MessageScope::from(message))
            .await
        {
            Some(found) => {
                let author = found.author.tag();
                let link = message_link(&found);
                self.translate(
                    "messageFound",
                    &[author.as_str(), found.content.as_str(), link.as_str()],
                )
            }
            None => self.translate("messageNotFound", &[token]),
        };
        self.reply(message, &reply).await
    }

    async fn link(&self, message: &Message, url: &str) -> anyhow::Result<()> {
        let key = if is_link_valid(self.link_probe.as_ref(), url).await {
            "linkValid"
        } else {
            "linkInvalid"
        };
        self.reply(message, &self.translate(key, &[url])).await
    }
}

/// Jump link to a message
pub fn message_link(message: &Message) -> String {
    let guild = message
        .guild_id
        .map_or_else(|| "@me".to_string(), |guild_id| guild_id.to_string());
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild, message.channel_id, message.id
    )
}
