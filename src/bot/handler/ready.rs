//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to Discord's gateway. Sets the bot's presence and
//! registers the global slash commands, replacing whatever set was registered before.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;

/// Custom status shown under the bot's name.
const ACTIVITY: &str = "Counting bumps";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom(ACTIVITY)));

    match Command::set_global_commands(&ctx.http, command::create_commands()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
