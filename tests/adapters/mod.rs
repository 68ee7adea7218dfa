// Mock implementations for adapter layer testing
#![allow(dead_code)]

pub mod fixtures;
pub mod mock_discord;
pub mod mock_guild_directory;
pub mod mock_link_probe;

pub use mock_discord::MockDiscordService;
pub use mock_guild_directory::MockGuildDirectory;
pub use mock_link_probe::MockLinkProbe;
