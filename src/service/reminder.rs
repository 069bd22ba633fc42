use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{reminder::ReminderRepository, user::UserRepository},
    error::AppError,
    model::{
        leaderboard::LEADERBOARD_SIZE,
        reminder::{ReminderStatus, ReminderTransition},
        user::BumpUser,
    },
    service::notifier::Notifier,
};

/// First-stage reminder, posted once the cooldown has passed.
pub const FIRST_NUDGE_MESSAGE: &str =
    "⏰ **The server can be bumped again!** Use `/bump` to keep us near the top.";

/// What a reminder poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No reminder is scheduled.
    Idle,
    /// A reminder exists but nothing is due yet.
    Pending,
    FirstNudgeSent,
    /// Escalation posted and the reminder cleared.
    Escalated,
}

/// Builds the second-stage reminder, mentioning the top contributors if there are any.
pub fn escalation_message(top: &[BumpUser]) -> String {
    let mut message =
        String::from("🔔 **Still no bump after 30 minutes!** Could someone run `/bump`?");

    if !top.is_empty() {
        let mentions: Vec<String> = top.iter().map(|u| format!("<@{}>", u.user_id)).collect();
        message.push_str("\nCalling our top bumpers: ");
        message.push_str(&mentions.join(" "));
    }

    message
}

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Advances the reminder state machine by at most one step.
    ///
    /// The message is posted before the stored state changes, so when posting fails the
    /// reminder is left as it was and the next poll tries again.
    ///
    /// # Arguments
    /// - `now` - Poll time
    ///
    /// # Returns
    /// - `Ok(TickOutcome)` - What the poll did
    /// - `Err(AppError)` - Database or Discord failure; state is unchanged if the post failed
    pub async fn tick(&self, now: DateTime<Utc>) -> Result<TickOutcome, AppError> {
        let reminder_repo = ReminderRepository::new(self.db);

        let Some(reminder) = reminder_repo.get().await? else {
            return Ok(TickOutcome::Idle);
        };

        match reminder.due_transition(now) {
            None => Ok(TickOutcome::Pending),
            Some(ReminderTransition::SendFirstNudge) => {
                self.notifier
                    .send_message(reminder.channel_id, FIRST_NUDGE_MESSAGE)
                    .await?;
                reminder_repo
                    .update_status(reminder.id, ReminderStatus::NotifiedFirst)
                    .await?;

                tracing::info!("Sent first bump reminder to channel {}", reminder.channel_id);

                Ok(TickOutcome::FirstNudgeSent)
            }
            Some(ReminderTransition::Escalate) => {
                let top = UserRepository::new(self.db)
                    .get_top(LEADERBOARD_SIZE)
                    .await?;

                self.notifier
                    .send_message(reminder.channel_id, &escalation_message(&top))
                    .await?;
                reminder_repo.clear().await?;

                tracing::info!(
                    "Sent escalated bump reminder to channel {} and cleared it",
                    reminder.channel_id
                );

                Ok(TickOutcome::Escalated)
            }
        }
    }
}
