use serenity::model::channel::Channel;
use serenity::model::id::UserId;
use serenity::model::permissions::Permissions;

/// Whether a user may change the bot settings of a guild
///
/// The bot owner always can; anyone else needs `MANAGE_GUILD`.
pub fn can_modify(user_id: UserId, owner_id: Option<UserId>, permissions: Permissions) -> bool {
    owner_id == Some(user_id) || permissions.contains(Permissions::MANAGE_GUILD)
}

/// Whether NSFW content may be posted in a channel
///
/// Direct messages always allow it; guild channels only when flagged NSFW.
pub fn can_send_nsfw(channel: &Channel) -> bool {
    match channel {
        Channel::Guild(channel) => channel.nsfw,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use serenity::model::channel::GuildChannel;

    #[rstest]
    #[case::owner(1, Some(1), Permissions::empty(), true)]
    #[case::manager(2, Some(1), Permissions::MANAGE_GUILD, true)]
    #[case::administrator_flags(2, None, Permissions::MANAGE_GUILD | Permissions::KICK_MEMBERS, true)]
    #[case::regular_member(2, Some(1), Permissions::SEND_MESSAGES, false)]
    #[case::no_owner_configured(1, None, Permissions::empty(), false)]
    fn test_can_modify(
        #[case] user: u64,
        #[case] owner: Option<u64>,
        #[case] permissions: Permissions,
        #[case] expected: bool,
    ) {
        assert_eq!(
            can_modify(UserId::new(user), owner.map(UserId::new), permissions),
            expected
        );
    }

    fn guild_channel(nsfw: bool) -> Channel {
        let channel: GuildChannel = serde_json::from_value(json!({
            "id": "41771983423143937",
            "guild_id": "41771983423143937",
            "name": "general",
            "type": 0,
            "position": 0,
            "permission_overwrites": [],
            "nsfw": nsfw,
        }))
        .unwrap();
        Channel::Guild(channel)
    }

    #[rstest]
    #[case::nsfw_guild_channel(guild_channel(true), true)]
    #[case::sfw_guild_channel(guild_channel(false), false)]
    fn test_can_send_nsfw(#[case] channel: Channel, #[case] expected: bool) {
        assert_eq!(can_send_nsfw(&channel), expected);
    }
}
