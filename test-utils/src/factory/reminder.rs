//! Reminder factory for creating the pending reminder row.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a test reminder with customizable fields.
///
/// Inserts directly, bypassing the single-row guarantee the repository enforces, so tests
/// can also set up the states the repository must repair.
pub struct ReminderFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    remind_at: DateTime<Utc>,
    status: String,
}

impl<'a> ReminderFactory<'a> {
    /// Creates a new ReminderFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: unique snowflake-like id
    /// - remind_at: two hours from now
    /// - status: `"waiting"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            channel_id: next_id().to_string(),
            remind_at: Utc::now() + Duration::hours(2),
            status: "waiting".to_string(),
        }
    }

    /// Sets the channel the reminder is posted to.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the time the reminder becomes due.
    pub fn remind_at(mut self, remind_at: DateTime<Utc>) -> Self {
        self.remind_at = remind_at;
        self
    }

    /// Sets the raw status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the reminder entity into the database.
    pub async fn build(self) -> Result<entity::reminder::Model, DbErr> {
        entity::reminder::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(self.channel_id),
            remind_at: ActiveValue::Set(self.remind_at),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting reminder due two hours from now.
pub async fn create_reminder(db: &DatabaseConnection) -> Result<entity::reminder::Model, DbErr> {
    ReminderFactory::new(db).build().await
}
