use anyhow::Context as _;
use discord_utils::adapters::{
    HttpLinkProbe, SerenityDiscordService, SerenityGuildDirectory, TelemetryClient,
};
use discord_utils::commands::CommandRouter;
use discord_utils::embed::{BotInfo, executable_modified, snowflake_timestamp};
use discord_utils::locale::{LocaleTable, load_translations};
use discord_utils::logging::{self, LogSeverity, report_command_error};
use discord_utils::params::Params;
use discord_utils::resolver::EntityResolver;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::info;

use chrono::{DateTime, Utc};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::prelude::*;

type Router = CommandRouter<SerenityGuildDirectory, SerenityDiscordService, HttpLinkProbe>;

struct Handler {
    params: Arc<Params>,
    locale: Arc<LocaleTable>,
    link_probe: Arc<HttpLinkProbe>,
    telemetry: Option<Arc<TelemetryClient>>,
    started_at: DateTime<Utc>,
    // Needs the cache and HTTP client of the connected shard, set in ready
    router: OnceLock<Router>,
}

impl Handler {
    fn new(params: &Params, locale: LocaleTable) -> anyhow::Result<Handler> {
        let link_probe = Arc::new(HttpLinkProbe::new(
            &params.user_agent,
            params.http_timeout(),
            params.http_connect_timeout(),
        )?);

        let telemetry = match (
            &params.telemetry_endpoint,
            &params.telemetry_token,
            &params.bot_name,
        ) {
            (Some(endpoint), Some(token), Some(bot_name)) => {
                let endpoint = url::Url::parse(endpoint).context("Parsing TELEMETRY_ENDPOINT URL")?;
                Some(Arc::new(TelemetryClient::new(
                    endpoint,
                    token.clone(),
                    bot_name.clone(),
                    params.http_timeout(),
                )?))
            }
            _ => None,
        };

        Ok(Handler {
            params: Arc::new(params.clone()),
            locale: Arc::new(locale),
            link_probe,
            telemetry,
            started_at: Utc::now(),
            router: OnceLock::new(),
        })
    }

    fn build_router(&self, ctx: &Context, ready: &Ready) -> Router {
        let directory = Arc::new(SerenityGuildDirectory::new(
            ctx.cache.clone(),
            ctx.http.clone(),
        ));
        let resolver = EntityResolver::new(directory, self.params.fetch_timeout());
        let discord_service = Arc::new(SerenityDiscordService::new(ctx.http.clone()));

        let bot_info = BotInfo {
            started_at: self.started_at,
            bot_name: self.params.bot_name.clone(),
            creator: self.params.bot_creator.clone(),
            github_owner: self.params.github_owner.clone(),
            account_created: snowflake_timestamp(ready.user.id.get()),
            last_version: executable_modified(),
        };

        CommandRouter::new(
            resolver,
            discord_service,
            self.link_probe.clone(),
            self.locale.clone(),
            bot_info,
            self.params.command_prefix.clone(),
            self.params.default_language.clone(),
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let _ = self.router.set(self.build_router(&ctx, &ready));

        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot is connected"
        );

        if let Some(telemetry) = &self.telemetry {
            telemetry.spawn_update("serverCount".to_string(), ready.guilds.len().to_string());
        }
    }

    async fn resume(&self, _ctx: Context, _resumed: ResumedEvent) {
        logging::log(LogSeverity::Info, "Gateway", "Session resumed");
    }

    async fn message(&self, ctx: Context, message: Message) {
        if message.author.bot {
            return;
        }

        // Not ready yet
        let Some(router) = self.router.get() else {
            return;
        };

        if let Err(err) = router.handle_message(&message).await {
            let discord_service = SerenityDiscordService::new(ctx.http.clone());
            report_command_error(&discord_service, message.channel_id, &err).await;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    logging::init_tracing();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");
    if !params.has_telemetry() {
        info!("Telemetry disabled");
    }

    let (locale, aliases) = load_translations(
        Path::new(&params.translations_dir),
        Path::new(&params.translations_work_dir),
    )
    .context("Loading translations")?;

    for language in locale.languages() {
        info!(
            %language,
            names = ?aliases.names(language),
            "Translation available"
        );
    }

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(Handler::new(&params, locale)?)
        .await
        .context("Creating Discord Client")?;

    if let Err(err) = client.start_autosharded().await {
        logging::log(
            LogSeverity::Critical,
            "Gateway",
            &format!("Discord client stopped: {err}"),
        );
        return Err(err).context("Running Discord Client");
    }

    Ok(())
}
