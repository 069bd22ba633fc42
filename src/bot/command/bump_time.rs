use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    error::AppError,
    model::reminder::Reminder,
    service::{query::BumpQueryService, reward::relative_timestamp},
};

pub const NAME: &str = "bump_time";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show when the server can be bumped next")
}

pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let reminder = BumpQueryService::new(db).next_reminder().await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(next_bump_reply(reminder.as_ref())),
        )
        .await?;

    Ok(())
}

fn next_bump_reply(reminder: Option<&Reminder>) -> String {
    match reminder {
        Some(reminder) => format!(
            "The next bump is possible {}.",
            relative_timestamp(reminder.remind_at)
        ),
        None => "No active reminder right now. Go ahead and `/bump`!".to_string(),
    }
}
