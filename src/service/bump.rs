use sea_orm::DatabaseConnection;

use crate::{
    data::{bump::BumpRepository, reminder::ReminderRepository},
    error::AppError,
    model::{
        bump::{BumpSignal, RecordBumpOutcome},
        reminder::{SetReminderParam, BUMP_COOLDOWN},
    },
    service::{
        notifier::Notifier,
        reward::{self, RewardDraw, RewardPacing, SlotOutcome},
    },
};

/// Posted when a bump could not be saved.
pub const BUMP_FAILURE_MESSAGE: &str =
    "⚠️ Something went wrong while recording that bump. It may not have been counted.";

/// What happened to a detected bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpProcessed {
    /// Newly counted, reminder rescheduled and rewards posted.
    Counted { bump_count: i32 },
    /// The reply was already counted; nothing else was done.
    Duplicate,
}

pub struct BumpService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    pacing: RewardPacing,
}

impl<'a> BumpService<'a> {
    /// Creates a new BumpService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `notifier` - Channel message sender
    /// - `pacing` - Delays between reward messages
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a dyn Notifier,
        pacing: RewardPacing,
    ) -> Self {
        Self {
            db,
            notifier,
            pacing,
        }
    }

    /// Counts a detected bump, reschedules the reminder and posts the rewards.
    ///
    /// If saving the bump or the reminder fails, a generic failure notice is posted to the
    /// bump channel and the error is returned; the bump is not retried. Failures while
    /// posting rewards are logged and do not fail the bump.
    ///
    /// # Arguments
    /// - `signal` - Bump extracted from a promotion bot reply
    ///
    /// # Returns
    /// - `Ok(BumpProcessed::Counted)` - Bump counted with the user's new total
    /// - `Ok(BumpProcessed::Duplicate)` - Reply was already counted
    /// - `Err(AppError)` - Persistence failed
    pub async fn process(&self, signal: &BumpSignal) -> Result<BumpProcessed, AppError> {
        match self.persist(signal).await {
            Ok(Some(bump_count)) => {
                tracing::info!(
                    "Counted bump by user {} in channel {} (total {})",
                    signal.user_id,
                    signal.channel_id,
                    bump_count
                );

                if let Err(e) = self.post_rewards(signal, bump_count).await {
                    tracing::warn!(
                        "Failed to post bump rewards in channel {}: {}",
                        signal.channel_id,
                        e
                    );
                }

                Ok(BumpProcessed::Counted { bump_count })
            }
            Ok(None) => {
                tracing::debug!("Bump message {} already counted", signal.message_id);

                Ok(BumpProcessed::Duplicate)
            }
            Err(e) => {
                if let Err(notify_err) = self
                    .notifier
                    .send_message(signal.channel_id, BUMP_FAILURE_MESSAGE)
                    .await
                {
                    tracing::error!(
                        "Failed to post bump failure notice in channel {}: {}",
                        signal.channel_id,
                        notify_err
                    );
                }

                Err(e)
            }
        }
    }

    /// Records the bump and replaces the reminder, returning the new count for a new bump.
    async fn persist(&self, signal: &BumpSignal) -> Result<Option<i32>, AppError> {
        let outcome = BumpRepository::new(self.db).record(signal).await?;

        let RecordBumpOutcome::Recorded { bump_count } = outcome else {
            return Ok(None);
        };

        ReminderRepository::new(self.db)
            .set(SetReminderParam {
                channel_id: signal.channel_id,
                remind_at: signal.bumped_at + BUMP_COOLDOWN,
            })
            .await?;

        Ok(Some(bump_count))
    }

    /// Plays the slot machine, then posts the thank-you and any milestone message.
    async fn post_rewards(&self, signal: &BumpSignal, bump_count: i32) -> Result<(), AppError> {
        let draw = RewardDraw::roll();
        let channel_id = signal.channel_id;
        let user_id = signal.user_id;

        let slot_id = self
            .notifier
            .send_message(channel_id, &reward::slot_frame(user_id, &draw.reels, 0))
            .await?;

        for revealed in 1..=draw.reels.len() {
            tokio::time::sleep(self.pacing.reel_delay).await;
            self.notifier
                .edit_message(
                    channel_id,
                    slot_id,
                    &reward::slot_frame(user_id, &draw.reels, revealed),
                )
                .await?;
        }

        self.notifier
            .send_message(channel_id, SlotOutcome::from_reels(&draw.reels).message())
            .await?;

        tokio::time::sleep(self.pacing.thanks_delay).await;

        let next_bump_at = signal.bumped_at + BUMP_COOLDOWN;
        self.notifier
            .send_message(
                channel_id,
                &reward::thank_you_message(user_id, bump_count, next_bump_at, draw.thanks),
            )
            .await?;

        if reward::is_milestone(bump_count) {
            self.notifier
                .send_message(channel_id, &reward::milestone_message(user_id, bump_count))
                .await?;
        }

        Ok(())
    }
}
