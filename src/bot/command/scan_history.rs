use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, EditInteractionResponse, GetMessages, MessageId, Permissions,
};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::{
    bot::command::option_value,
    error::{command::CommandError, internal::InternalError, AppError},
    model::{
        event::BotEvent,
        message::InboundMessage,
        scan::{ScanOutcome, DEFAULT_SCAN_LIMIT, MAX_SCAN_LIMIT},
    },
    service::{detector::BumpDetector, scan::ScanService},
};

pub const NAME: &str = "scan_history";

const LIMIT_OPTION: &str = "limit";

/// Discord's maximum page size for channel history.
const HISTORY_PAGE_SIZE: u64 = 100;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Count past bumps in this channel's history (one time only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                LIMIT_OPTION,
                "Number of messages to scan (default 1000)",
            )
            .min_int_value(1)
            .max_int_value(10_000)
            .required(false),
        )
}

/// Walks the invoking channel's history and counts past bumps, once per deployment.
///
/// The reply is ephemeral. Permission and completion are checked before any history is
/// fetched; the default member permissions only hide the command, they are not trusted.
/// The fetched history is counted by the bump worker, queued behind any live bumps.
pub async fn run(
    db: &DatabaseConnection,
    events: &mpsc::Sender<BotEvent>,
    detector: &BumpDetector,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer_ephemeral(&ctx.http).await?;

    if command.guild_id.is_none() {
        return Err(CommandError::GuildOnly.into());
    }

    let invoker_is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());

    let scan_service = ScanService::new(db, *detector);
    scan_service.authorize(invoker_is_admin).await?;

    let limit = resolve_limit(option_value(command, LIMIT_OPTION).and_then(|v| v.as_i64()));

    tracing::info!(
        "User {} started a history scan of up to {} messages in channel {}",
        command.user.id,
        limit,
        command.channel_id
    );

    let history = fetch_history(&ctx.http, command.channel_id, limit).await?;
    let outcome = queue_scan(events, history).await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(scan_reply(&outcome)),
        )
        .await?;

    Ok(())
}

/// Fetches up to `limit` messages, newest first, paging backwards through the channel.
async fn fetch_history(
    http: &Arc<Http>,
    channel_id: ChannelId,
    limit: u64,
) -> Result<Vec<InboundMessage>, AppError> {
    let mut history = Vec::new();
    let mut before: Option<MessageId> = None;

    while (history.len() as u64) < limit {
        let page_size = (limit - history.len() as u64).min(HISTORY_PAGE_SIZE);

        let mut request = GetMessages::new().limit(page_size as u8);
        if let Some(before) = before {
            request = request.before(before);
        }

        let page = channel_id.messages(http, request).await?;

        // Pages are newest first, so the last message is the oldest seen so far
        let Some(oldest) = page.last() else {
            break;
        };
        before = Some(oldest.id);

        let exhausted = (page.len() as u64) < page_size;
        history.extend(page.iter().map(InboundMessage::from_discord));

        if exhausted {
            break;
        }
    }

    Ok(history)
}

/// Hands the history to the bump worker and waits for its result.
async fn queue_scan(
    events: &mpsc::Sender<BotEvent>,
    history: Vec<InboundMessage>,
) -> Result<ScanOutcome, AppError> {
    let (reply, outcome) = oneshot::channel();

    events
        .send(BotEvent::Scan { history, reply })
        .await
        .map_err(|_| InternalError::EventChannelClosed)?;

    outcome
        .await
        .map_err(|_| InternalError::EventChannelClosed)?
}

/// Clamps the requested message count to the allowed range.
fn resolve_limit(requested: Option<i64>) -> u64 {
    match requested {
        Some(limit) => (limit.max(1) as u64).min(MAX_SCAN_LIMIT),
        None => DEFAULT_SCAN_LIMIT,
    }
}

fn scan_reply(outcome: &ScanOutcome) -> String {
    match outcome {
        ScanOutcome::Completed(report) => format!(
            "Scan complete! Checked {} messages and found {} bumps: **{}** newly counted, {} already counted.\n**The history scan is now locked.**",
            report.scanned, report.detected, report.recorded, report.already_counted
        ),
        ScanOutcome::NothingFound(report) => format!(
            "Checked {} messages but found no bumps. Try again with a larger `limit`.",
            report.scanned
        ),
    }
}
