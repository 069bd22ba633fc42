//! Key/value settings repository.
//!
//! Currently holds the one-time history scan gate.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

const SCAN_COMPLETED_KEY: &str = "scan_completed";

/// Repository providing database operations for bot settings.
pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    /// Creates a new SettingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a raw setting value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Setting is present
    /// - `Ok(None)` - Setting has never been written
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Inserts or overwrites a setting value.
    ///
    /// # Returns
    /// - `Ok(())` - Setting stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_column(entity::setting::Column::Value)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether the one-time history scan has been completed.
    ///
    /// An absent setting counts as not completed.
    pub async fn is_scan_completed(&self) -> Result<bool, DbErr> {
        Ok(self.get(SCAN_COMPLETED_KEY).await?.as_deref() == Some("true"))
    }

    /// Marks the one-time history scan as completed. There is no operation to undo this.
    pub async fn mark_scan_completed(&self) -> Result<(), DbErr> {
        self.set(SCAN_COMPLETED_KEY, "true").await
    }
}
