//! Setting factory for key/value rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a setting row.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Setting key
/// - `value` - Raw setting value
///
/// # Returns
/// - `Ok(entity::setting::Model)` - Created setting entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::setting::Model, DbErr> {
    entity::setting::ActiveModel {
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
    }
    .insert(db)
    .await
}
