//! Reminder domain model and the two-stage reminder state machine.
//!
//! A reminder moves `Waiting` → `NotifiedFirst` → cleared. The transitions themselves are
//! decided here from the reminder's own fields and the poll time; performing them
//! (posting the message, updating or deleting the row) is the reminder service's job.

use chrono::{DateTime, Duration, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Delay between a bump and the next time the server can bump again.
pub const BUMP_COOLDOWN: Duration = Duration::hours(2);

/// Time after the first nudge before the escalation is sent.
pub const ESCALATION_GRACE: Duration = Duration::minutes(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    /// Due at `remind_at`, nothing announced yet.
    Waiting,
    /// First nudge posted, escalation pending.
    NotifiedFirst,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::NotifiedFirst => "notified_first",
        }
    }

    /// Parses a stored status string.
    ///
    /// Unknown values are read as `Waiting`, matching the column default, so a row written
    /// by an older deployment is re-announced instead of stuck.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "notified_first" | "notified_1st" => Self::NotifiedFirst,
            "waiting" => Self::Waiting,
            other => {
                tracing::warn!("Unknown reminder status '{}', treating as waiting", other);
                Self::Waiting
            }
        }
    }
}

/// Action a poll should take for the current reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTransition {
    /// Post the first nudge and move to `NotifiedFirst`.
    SendFirstNudge,
    /// Post the escalation and delete the reminder.
    Escalate,
}

/// The single pending bump reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: i32,
    /// Channel the reminder is posted to
    pub channel_id: u64,
    /// Time the server can bump again
    pub remind_at: DateTime<Utc>,
    pub status: ReminderStatus,
}

impl Reminder {
    /// Converts an entity model to a reminder domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored channel ID is not a valid u64
    pub fn from_entity(entity: entity::reminder::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            remind_at: entity.remind_at,
            status: ReminderStatus::from_stored(&entity.status),
        })
    }

    /// Time at which an unanswered first nudge escalates.
    pub fn escalate_at(&self) -> DateTime<Utc> {
        self.remind_at + ESCALATION_GRACE
    }

    /// Decides which transition, if any, is due at `now`.
    ///
    /// At most one transition is returned per call, so a reminder that was missed entirely
    /// still goes through the first nudge before escalating on a later poll.
    pub fn due_transition(&self, now: DateTime<Utc>) -> Option<ReminderTransition> {
        match self.status {
            ReminderStatus::Waiting if now >= self.remind_at => {
                Some(ReminderTransition::SendFirstNudge)
            }
            ReminderStatus::NotifiedFirst if now >= self.escalate_at() => {
                Some(ReminderTransition::Escalate)
            }
            _ => None,
        }
    }
}

/// Parameters for replacing the pending reminder.
#[derive(Debug, Clone)]
pub struct SetReminderParam {
    /// Channel to post the reminder in
    pub channel_id: u64,
    /// Time the reminder becomes due
    pub remind_at: DateTime<Utc>,
}
