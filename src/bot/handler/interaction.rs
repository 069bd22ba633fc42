use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};
use tokio::sync::mpsc;

use crate::{bot::command, model::event::BotEvent, service::detector::BumpDetector};

/// Routes slash commands to their handlers. Other interaction kinds are ignored.
pub async fn handle_interaction(
    db: &DatabaseConnection,
    events: &mpsc::Sender<BotEvent>,
    detector: &BumpDetector,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from user {}",
        command.data.name,
        command.user.id
    );

    command::dispatch(db, events, detector, &ctx, &command).await;
}
