// Trait definitions
pub mod discord_service;
pub mod guild_directory;
pub mod link_probe;

// Implementations
pub mod http_link_probe;
pub mod serenity_discord_service;
pub mod serenity_guild_directory;
pub mod telemetry_client;

// Re-exports for convenience
pub use discord_service::DiscordService;
pub use guild_directory::GuildDirectory;
pub use http_link_probe::HttpLinkProbe;
pub use link_probe::LinkProbe;
pub use serenity_discord_service::SerenityDiscordService;
pub use serenity_guild_directory::{SerenityGuildDirectory, is_text_channel};
pub use telemetry_client::TelemetryClient;
