use crate::adapters::DiscordService;
use crate::format::text::{EMBED_DESCRIPTION_MAX_LEN, truncate};
use serenity::builder::CreateEmbed;
use serenity::model::Colour;
use serenity::model::id::ChannelId;
use tracing::{Level, debug, error, info, trace, warn};

/// Default filter: this crate at info, serenity at warn
pub const DEFAULT_FILTER: &str = "discord_utils=info,serenity=warn";

/// Initialize the tracing subscriber for structured logging
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Level colouring comes from the
/// fmt layer.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}

/// Severity of a message relayed from the platform or a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Critical,
    Error,
    Warning,
    Info,
    Verbose,
    Debug,
}

impl LogSeverity {
    /// Tracing level the severity is emitted at
    pub fn level(self) -> Level {
        match self {
            LogSeverity::Critical | LogSeverity::Error => Level::ERROR,
            LogSeverity::Warning => Level::WARN,
            LogSeverity::Info => Level::INFO,
            LogSeverity::Verbose => Level::DEBUG,
            LogSeverity::Debug => Level::TRACE,
        }
    }
}

/// Emit a message at the level matching `severity`
///
/// Critical messages are flagged with `critical = true`.
pub fn log(severity: LogSeverity, source: &str, message: &str) {
    let critical = severity == LogSeverity::Critical;
    let level = severity.level();

    if level == Level::ERROR {
        error!(%source, critical, "{message}");
    } else if level == Level::WARN {
        warn!(%source, "{message}");
    } else if level == Level::INFO {
        info!(%source, "{message}");
    } else if level == Level::DEBUG {
        debug!(%source, "{message}");
    } else {
        trace!(%source, "{message}");
    }
}

/// Embed telling the user their last command failed
///
/// The title is the outermost error message, the description carries the
/// root cause.
pub fn command_error_embed(err: &anyhow::Error) -> CreateEmbed {
    let description = format!(
        "An error occurred while executing last command.\nHere are some details about it: {}",
        err.root_cause()
    );

    CreateEmbed::new()
        .colour(Colour::RED)
        .title(truncate(&err.to_string(), 256))
        .description(truncate(&description, EMBED_DESCRIPTION_MAX_LEN))
}

/// Log a command failure and report it in the channel it came from
///
/// Failing to deliver the report is only logged.
pub async fn report_command_error<D>(discord: &D, channel_id: ChannelId, err: &anyhow::Error)
where
    D: DiscordService + ?Sized,
{
    error!(?err, %channel_id, "Command failed");

    if let Err(send_err) = discord
        .send_embed(channel_id, command_error_embed(err))
        .await
    {
        error!(?send_err, %channel_id, "Failed to report command error");
    }
}
