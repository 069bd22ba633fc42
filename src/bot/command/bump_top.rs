use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter,
    EditInteractionResponse, UserId,
};

use crate::{error::AppError, model::leaderboard::Leaderboard, service::query::BumpQueryService};

pub const NAME: &str = "bump_top";

const EMPTY_LEADERBOARD: &str = "Nobody has bumped yet. Be the first with `/bump`!";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the top bumpers and the server's bump total")
}

/// Replies with the top five bumpers as an embed, or a notice when nobody has bumped.
pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let leaderboard = BumpQueryService::new(db).get_leaderboard().await?;

    let response = if leaderboard.is_empty() {
        EditInteractionResponse::new().content(EMPTY_LEADERBOARD)
    } else {
        let mut names = Vec::with_capacity(leaderboard.entries.len());
        for entry in &leaderboard.entries {
            names.push(display_name(ctx, entry.user_id).await);
        }

        EditInteractionResponse::new().embed(leaderboard_embed(&leaderboard, &names))
    };

    command.edit_response(&ctx.http, response).await?;

    Ok(())
}

/// Fetches a user's display name, falling back to the raw ID.
async fn display_name(ctx: &Context, user_id: u64) -> String {
    match ctx.http.get_user(UserId::new(user_id)).await {
        Ok(user) => user.display_name().to_string(),
        Err(e) => {
            tracing::debug!("Failed to fetch user {} for leaderboard: {}", user_id, e);
            user_id.to_string()
        }
    }
}

fn leaderboard_embed(leaderboard: &Leaderboard, names: &[String]) -> CreateEmbed {
    CreateEmbed::new()
        .title("🏆 Bump Leaderboard 🏆")
        .description(format!(
            "Server total: **{}** bumps. Thank you all!",
            leaderboard.total_bumps
        ))
        .colour(Colour::GOLD)
        .fields(leaderboard_fields(leaderboard, names))
        .footer(CreateEmbedFooter::new("Every bump keeps the server visible."))
}

/// One embed field per entry: rank and name, then the count.
fn leaderboard_fields(leaderboard: &Leaderboard, names: &[String]) -> Vec<(String, String, bool)> {
    leaderboard
        .entries
        .iter()
        .zip(names)
        .enumerate()
        .map(|(index, (entry, name))| {
            (
                format!("{} {}", rank_label(index), name),
                format!("**{}** bumps", entry.bump_count),
                false,
            )
        })
        .collect()
}

fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}
