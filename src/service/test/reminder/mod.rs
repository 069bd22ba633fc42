use crate::{
    data::{bump::BumpRepository, reminder::ReminderRepository, user::UserRepository},
    error::AppError,
    model::{
        bump::{BumpSignal, BumpSource},
        event::BotEvent,
        reminder::{ReminderStatus, BUMP_COOLDOWN},
    },
    scheduler::worker::BumpWorker,
    service::{
        detector::BumpDetector,
        notifier::recording::RecordingNotifier,
        reminder::{ReminderService, TickOutcome, FIRST_NUDGE_MESSAGE},
        reward::RewardPacing,
    },
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory::reminder::ReminderFactory};

mod scenario;

const CHANNEL: u64 = 700;

const BUMP_BOT: u64 = 302050872383242240;

/// A worker with instant reward pacing.
fn instant_worker(db: &DatabaseConnection, notifier: Arc<RecordingNotifier>) -> BumpWorker {
    BumpWorker::new(
        db.clone(),
        notifier,
        BumpDetector::new(BUMP_BOT),
        RewardPacing::instant(),
    )
}

fn due_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}
