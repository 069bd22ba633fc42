//! User bump count repository.
//!
//! Read side of the `users` table. Counts are only written through
//! [`BumpRepository::record`](super::bump::BumpRepository::record) so that every increment
//! has a matching bump log row.

use migration::Expr;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryOrder, QuerySelect};

use crate::{error::AppError, model::user::BumpUser};

/// Repository providing read operations for per-user bump counts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's bump count.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(count)` - The user's count, `0` if the user has never bumped
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_count(&self, user_id: u64) -> Result<i32, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|user| user.bump_count).unwrap_or(0))
    }

    /// Gets the users with the highest bump counts.
    ///
    /// Ordered by count descending. Ties keep the database's natural order.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok(Vec<BumpUser>)` - Up to `limit` users, highest count first
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored user ID is not a valid u64
    pub async fn get_top(&self, limit: u64) -> Result<Vec<BumpUser>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::BumpCount)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(BumpUser::from_entity).collect()
    }

    /// Sums every user's bump count.
    ///
    /// # Returns
    /// - `Ok(total)` - Server-wide bump total, `0` when no users exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn total_bumps(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::User::find()
            .select_only()
            .column_as(
                Expr::col((entity::prelude::User, entity::user::Column::BumpCount)).sum(),
                "total",
            )
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        // SUM over no rows is NULL
        Ok(total.flatten().unwrap_or(0))
    }
}
