//! Read-only queries behind the `/bump_top`, `/bump_user` and `/bump_time` commands.

use sea_orm::DatabaseConnection;

use crate::{
    data::{reminder::ReminderRepository, user::UserRepository},
    error::AppError,
    model::{
        leaderboard::{Leaderboard, LEADERBOARD_SIZE},
        reminder::Reminder,
    },
};

pub struct BumpQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BumpQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the top contributors and the server-wide total.
    ///
    /// # Returns
    /// - `Ok(Leaderboard)` - Up to five users by count descending; empty if nobody has bumped
    /// - `Err(AppError)` - Database error
    pub async fn get_leaderboard(&self) -> Result<Leaderboard, AppError> {
        let user_repo = UserRepository::new(self.db);

        let entries = user_repo.get_top(LEADERBOARD_SIZE).await?;
        let total_bumps = user_repo.total_bumps().await?;

        Ok(Leaderboard {
            entries,
            total_bumps,
        })
    }

    /// Gets a user's bump count, zero if they have never bumped.
    pub async fn get_user_count(&self, user_id: u64) -> Result<i32, AppError> {
        Ok(UserRepository::new(self.db).get_count(user_id).await?)
    }

    /// Gets the pending reminder, if any.
    pub async fn next_reminder(&self) -> Result<Option<Reminder>, AppError> {
        ReminderRepository::new(self.db).get().await
    }
}
