use crate::{error::AppError, model::reminder::ReminderStatus, service::query::BumpQueryService};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_leaderboard;
mod get_user_count;
mod next_reminder;
