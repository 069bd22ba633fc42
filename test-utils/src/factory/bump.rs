//! Bump log factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a bump log row for the given user with a fresh message id.
///
/// Only writes the log; the user's count is left untouched.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the bumping user
///
/// # Returns
/// - `Ok(entity::bump::Model)` - Created bump log entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bump(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::bump::Model, DbErr> {
    entity::bump::ActiveModel {
        message_id: ActiveValue::Set(next_id().to_string()),
        user_id: ActiveValue::Set(user_id.into()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        bumped_at: ActiveValue::Set(Utc::now()),
        source: ActiveValue::Set("interaction".to_string()),
    }
    .insert(db)
    .await
}
