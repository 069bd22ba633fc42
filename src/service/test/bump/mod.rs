use crate::{
    data::{reminder::ReminderRepository, user::UserRepository},
    error::AppError,
    model::{
        bump::{BumpSignal, BumpSource},
        reminder::{ReminderStatus, BUMP_COOLDOWN},
    },
    service::{
        bump::{BumpProcessed, BumpService, BUMP_FAILURE_MESSAGE},
        notifier::recording::RecordingNotifier,
        reward::RewardPacing,
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};


const CHANNEL: u64 = 500;

fn signal(message_id: u64, user_id: u64) -> BumpSignal {
    BumpSignal {
        message_id,
        channel_id: CHANNEL,
        user_id,
        bumped_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        source: BumpSource::Interaction,
    }
}
