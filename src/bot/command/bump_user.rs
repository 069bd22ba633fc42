use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::{
    bot::command::option_value, error::command::CommandError, error::AppError,
    service::query::BumpQueryService,
};

pub const NAME: &str = "bump_user";

const USER_OPTION: &str = "user";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show how many times a member has bumped")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, USER_OPTION, "Member to look up")
                .required(true),
        )
}

pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let user_id = option_value(command, USER_OPTION)
        .and_then(|value| value.as_user_id())
        .ok_or_else(|| CommandError::InvalidOption(USER_OPTION.to_string()))?;

    let bump_count = BumpQueryService::new(db).get_user_count(user_id.get()).await?;

    let name = command
        .data
        .resolved
        .users
        .get(&user_id)
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| user_id.to_string());

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(user_count_reply(&name, bump_count)),
        )
        .await?;

    Ok(())
}

fn user_count_reply(name: &str, bump_count: i32) -> String {
    if bump_count == 0 {
        format!("**{}** has not bumped yet.", name)
    } else {
        format!("**{}** has bumped **{}** times.", name, bump_count)
    }
}
