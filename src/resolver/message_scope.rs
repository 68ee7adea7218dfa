use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId};

/// Where to look for a message.
///
/// `guild_id` is `None` for direct-message channels, which never trigger a
/// guild-wide search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageScope {
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
}

impl MessageScope {
    pub fn direct(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            guild_id: None,
        }
    }

    pub fn guild(channel_id: ChannelId, guild_id: GuildId) -> Self {
        Self {
            channel_id,
            guild_id: Some(guild_id),
        }
    }
}

/// The channel a message was posted in
impl From<&Message> for MessageScope {
    fn from(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id,
            guild_id: message.guild_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_guild_message() {
        let mut message = Message::default();
        message.channel_id = ChannelId::new(222);
        message.guild_id = Some(GuildId::new(333));

        let scope = MessageScope::from(&message);

        assert_eq!(scope, MessageScope::guild(ChannelId::new(222), GuildId::new(333)));
    }

    #[test]
    fn test_scope_from_direct_message() {
        let mut message = Message::default();
        message.channel_id = ChannelId::new(222);

        let scope = MessageScope::from(&message);

        assert_eq!(scope, MessageScope::direct(ChannelId::new(222)));
    }
}
