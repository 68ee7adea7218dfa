use crate::format::format_duration;
use chrono::{DateTime, Utc};
use serenity::builder::CreateEmbed;
use serenity::model::Colour;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01)
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Date format used in the info embed
const DATE_FORMAT: &str = "%H:%M:%S %d/%m/%y";

/// Data shown by the bot info embed
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub started_at: DateTime<Utc>,
    /// Repository name, also used for the GitHub link
    pub bot_name: Option<String>,
    pub creator: Option<String>,
    pub github_owner: Option<String>,
    pub account_created: Option<DateTime<Utc>>,
    pub last_version: Option<DateTime<Utc>>,
}

impl BotInfo {
    /// Fields of the embed as `(name, value)` at instant `now`
    pub fn fields(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let uptime = (now - self.started_at).to_std().unwrap_or_default();

        let mut fields = vec![("Uptime", format_duration(uptime))];

        if let Some(creator) = &self.creator {
            fields.push(("Creator", creator.clone()));
        }
        if let Some(created) = self.account_created {
            fields.push(("Account creation", created.format(DATE_FORMAT).to_string()));
        }
        if let Some(version) = self.last_version {
            fields.push(("Last version", version.format(DATE_FORMAT).to_string()));
        }
        if let (Some(owner), Some(name)) = (&self.github_owner, &self.bot_name) {
            fields.push(("GitHub", format!("https://github.com/{owner}/{name}")));
        }

        fields
    }

    /// Build the embed at instant `now`
    pub fn embed(&self, now: DateTime<Utc>) -> CreateEmbed {
        self.fields(now)
            .into_iter()
            .fold(CreateEmbed::new().colour(Colour::PURPLE), |embed, (name, value)| {
                embed.field(name, value, false)
            })
    }
}

/// Creation time encoded in a Discord snowflake ID
pub fn snowflake_timestamp(id: u64) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(id >> 22).ok()? + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(millis)
}

/// Modification time of the running executable
pub fn executable_modified() -> Option<DateTime<Utc>> {
    let modified = std::env::current_exe().ok()?.metadata().ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}
