//! Bump log repository.
//!
//! Recording a bump writes the bump log row and increments the user's count in a single
//! transaction of upserts. The log is keyed by the promotion bot's message ID, which makes
//! recording idempotent: a message seen twice (gateway redelivery, or a history scan over
//! bumps that were already counted live) is only counted once.

use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, ExprTrait, TransactionTrait,
    TryInsertResult,
};

use crate::model::bump::{BumpSignal, RecordBumpOutcome};

/// Repository providing database operations for the bump log and the counts derived from it.
pub struct BumpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BumpRepository<'a> {
    /// Creates a new BumpRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a bump and increments the bumping user's count.
    ///
    /// Both writes are single statements inside one transaction, with no read before them:
    /// the log row is inserted with `ON CONFLICT DO NOTHING` and the count is an
    /// insert-or-increment upsert. Concurrent writers therefore queue on the database's
    /// write lock instead of racing on a value they read earlier. The transaction rolls
    /// back if any step fails.
    ///
    /// # Arguments
    /// - `signal` - The detected bump
    ///
    /// # Returns
    /// - `Ok(RecordBumpOutcome::Recorded)` - New bump, with the user's updated count
    /// - `Ok(RecordBumpOutcome::AlreadyRecorded)` - Message already counted, with the
    ///   user's current count
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn record(&self, signal: &BumpSignal) -> Result<RecordBumpOutcome, DbErr> {
        let user_id = signal.user_id.to_string();

        let txn = self.db.begin().await?;

        let logged = entity::prelude::Bump::insert(entity::bump::ActiveModel {
            message_id: ActiveValue::Set(signal.message_id.to_string()),
            user_id: ActiveValue::Set(user_id.clone()),
            channel_id: ActiveValue::Set(signal.channel_id.to_string()),
            bumped_at: ActiveValue::Set(signal.bumped_at),
            source: ActiveValue::Set(signal.source.as_str().to_string()),
        })
        .on_conflict_do_nothing()
        .exec_without_returning(&txn)
        .await?;

        if !matches!(logged, TryInsertResult::Inserted(rows) if rows > 0) {
            let existing_user = entity::prelude::User::find_by_id(user_id).one(&txn).await?;

            txn.commit().await?;

            return Ok(RecordBumpOutcome::AlreadyRecorded {
                bump_count: existing_user.map(|user| user.bump_count).unwrap_or(0),
            });
        }

        let user = entity::prelude::User::insert(entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            bump_count: ActiveValue::Set(1),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::UserId)
                .value(
                    entity::user::Column::BumpCount,
                    Expr::col((entity::prelude::User, entity::user::Column::BumpCount)).add(1),
                )
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok(RecordBumpOutcome::Recorded {
            bump_count: user.bump_count,
        })
    }

    /// Counts the bump log rows attributed to a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(count)` - Number of logged bumps by the user
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn count_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

        entity::prelude::Bump::find()
            .filter(entity::bump::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await
    }
}
