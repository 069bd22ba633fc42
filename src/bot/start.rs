use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use tokio::sync::mpsc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError, model::event::BotEvent,
    service::detector::BumpDetector,
};

/// Builds the Discord client without connecting.
///
/// The returned client's `http` is shared with the notifier so reward and reminder
/// messages are sent through the same rate limiter as the gateway handlers.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the slash commands
/// - `events` - Sender for the bump worker's event queue
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    events: mpsc::Sender<BotEvent>,
) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is privileged - must be enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, events, BumpDetector::new(config.bump_bot_id));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it will block until the shards
/// shut down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if connecting to the gateway fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
