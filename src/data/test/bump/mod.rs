use crate::{
    data::{bump::BumpRepository, user::UserRepository},
    model::bump::{BumpSignal, BumpSource, RecordBumpOutcome},
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod record;

/// Builds a bump signal for `user_id` with the given reply message ID.
fn signal(message_id: u64, user_id: u64) -> BumpSignal {
    BumpSignal {
        message_id,
        channel_id: 500,
        user_id,
        bumped_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        source: BumpSource::Interaction,
    }
}
