//! Per-user bump count model.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A user's cumulative bump count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpUser {
    /// Discord ID of the user
    pub user_id: u64,
    /// Number of bumps recorded for the user
    pub bump_count: i32,
}

impl BumpUser {
    /// Converts an entity model to a bump user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(BumpUser)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a valid u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            bump_count: entity.bump_count,
        })
    }
}
