//! User factory for creating bump count rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .user_id("123456789")
///     .bump_count(12)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    bump_count: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id: unique snowflake-like id
    /// - bump_count: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            bump_count: 1,
        }
    }

    /// Sets the Discord ID for the user.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the cumulative bump count for the user.
    pub fn bump_count(mut self, bump_count: i32) -> Self {
        self.bump_count = bump_count;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            bump_count: ActiveValue::Set(self.bump_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific Discord ID and bump count.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user_with_count(db, "123456789", 10).await?;
/// ```
pub async fn create_user_with_count(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    bump_count: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .user_id(user_id)
        .bump_count(bump_count)
        .build()
        .await
}
