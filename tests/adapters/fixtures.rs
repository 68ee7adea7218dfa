use serde_json::json;
use serenity::model::channel::{GuildChannel, Message};
use serenity::model::guild::{Member, Role};
use serenity::model::id::{ChannelId, GuildId, MessageId, UserId};
use serenity::model::user::User;

pub const GUILD_ID: u64 = 100_000_000_000_000_001;

/// Guild member with a username and optional nickname
pub fn member(user_id: u64, name: &str, nick: Option<&str>) -> Member {
    let mut user = User::default();
    user.id = UserId::new(user_id);
    user.name = name.to_string();

    let mut member = Member::default();
    member.user = user;
    member.guild_id = GuildId::new(GUILD_ID);
    member.nick = nick.map(str::to_string);
    member
}

/// Role of the test guild
pub fn role(role_id: u64, name: &str) -> Role {
    // Use serde_json to construct the non-exhaustive Role struct
    serde_json::from_value(json!({
        "id": role_id.to_string(),
        "guild_id": GUILD_ID.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": true,
        "flags": 0,
    }))
    .expect("Failed to deserialize mock Role")
}

/// Text channel of the test guild
pub fn text_channel(channel_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(json!({
        "id": channel_id.to_string(),
        "guild_id": GUILD_ID.to_string(),
        "name": name,
        "type": 0,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
    }))
    .expect("Failed to deserialize mock GuildChannel")
}

/// Message in a channel, posted by a user named "author"
pub fn message(message_id: u64, channel_id: u64, guild_id: Option<u64>, content: &str) -> Message {
    let mut author = User::default();
    author.id = UserId::new(7);
    author.name = "author".to_string();

    let mut message = Message::default();
    message.id = MessageId::new(message_id);
    message.channel_id = ChannelId::new(channel_id);
    message.guild_id = guild_id.map(GuildId::new);
    message.content = content.to_string();
    message.author = author;
    message
}
