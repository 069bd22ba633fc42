//! Reminder repository.
//!
//! The `reminders` table holds at most one row. Setting a reminder replaces whatever was
//! there (last write wins) inside a transaction, so readers never observe two rows or none
//! mid-replace.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::AppError,
    model::reminder::{Reminder, ReminderStatus, SetReminderParam},
};

/// Repository providing database operations for the pending bump reminder.
pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    /// Creates a new ReminderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the pending reminder.
    ///
    /// Deletes every existing reminder row and inserts the new one with status `waiting`
    /// in a single transaction.
    ///
    /// # Arguments
    /// - `param` - Channel and due time of the new reminder
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The newly stored reminder
    /// - `Err(AppError::DbErr)` - Database error; the previous reminder is kept
    pub async fn set(&self, param: SetReminderParam) -> Result<Reminder, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Reminder::delete_many().exec(&txn).await?;

        let entity = entity::reminder::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            remind_at: ActiveValue::Set(param.remind_at),
            status: ActiveValue::Set(ReminderStatus::Waiting.as_str().to_string()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Reminder::from_entity(entity)
    }

    /// Gets the pending reminder.
    ///
    /// Should more than one row exist (written outside this repository), the earliest
    /// one is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Reminder))` - A reminder is pending
    /// - `Ok(None)` - No reminder is set
    /// - `Err(AppError)` - Database error or unparseable stored channel ID
    pub async fn get(&self) -> Result<Option<Reminder>, AppError> {
        let entity = entity::prelude::Reminder::find()
            .order_by_asc(entity::reminder::Column::RemindAt)
            .one(self.db)
            .await?;

        entity.map(Reminder::from_entity).transpose()
    }

    /// Updates the status of a reminder.
    ///
    /// # Arguments
    /// - `id` - Reminder row ID
    /// - `status` - New status
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or the reminder no longer exists)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, id: i32, status: ReminderStatus) -> Result<(), DbErr> {
        entity::prelude::Reminder::update_many()
            .filter(entity::reminder::Column::Id.eq(id))
            .col_expr(
                entity::reminder::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes the pending reminder.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of reminder rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Reminder::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
