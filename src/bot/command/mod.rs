//! Slash command definitions and handlers.
//!
//! Every handler defers its response first and then edits it, so a slow database or a
//! long history scan never runs into Discord's three second acknowledgement window.
//! Handlers return `AppError`; [`dispatch`] turns a `CommandError` into its user-facing
//! text and anything else into a generic failure reply after logging it.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandDataOptionValue, CommandInteraction, Context, CreateCommand, EditInteractionResponse,
};
use tokio::sync::mpsc;

use crate::{error::AppError, model::event::BotEvent, service::detector::BumpDetector};

pub mod bump_time;
pub mod bump_top;
pub mod bump_user;
pub mod scan_history;

/// Reply for failures that are not the invoking user's fault.
const GENERIC_COMMAND_ERROR: &str = "Something went wrong while running this command.";

/// Builds the global slash command set.
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        bump_top::register(),
        bump_user::register(),
        bump_time::register(),
        scan_history::register(),
    ]
}

/// Runs the handler for a slash command and reports failures back to the invoker.
pub async fn dispatch(
    db: &DatabaseConnection,
    events: &mpsc::Sender<BotEvent>,
    detector: &BumpDetector,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let result = match command.data.name.as_str() {
        bump_top::NAME => bump_top::run(db, ctx, command).await,
        bump_user::NAME => bump_user::run(db, ctx, command).await,
        bump_time::NAME => bump_time::run(db, ctx, command).await,
        scan_history::NAME => scan_history::run(db, events, detector, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(error) = result {
        report_error(ctx, command, error).await;
    }
}

async fn report_error(ctx: &Context, command: &CommandInteraction, error: AppError) {
    let content = match &error {
        AppError::CommandErr(rejection) => {
            tracing::info!(
                "Rejected /{} from user {}: {}",
                command.data.name,
                command.user.id,
                rejection
            );
            rejection.to_string()
        }
        _ => {
            tracing::error!("Failed to run /{}: {}", command.data.name, error);
            GENERIC_COMMAND_ERROR.to_string()
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!(
            "Failed to send error response for /{}: {}",
            command.data.name,
            e
        );
    }
}

/// Looks up a top-level option value by name.
fn option_value<'a>(
    command: &'a CommandInteraction,
    name: &str,
) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}
