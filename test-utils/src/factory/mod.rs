//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let reminder = factory::reminder::create_reminder(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .user_id("987654321")
//!     .bump_count(42)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create bump count rows
//! - `bump` - Create bump log rows
//! - `reminder` - Create the pending reminder row
//! - `setting` - Create key/value setting rows

pub mod bump;
pub mod helpers;
pub mod reminder;
pub mod setting;
pub mod user;

pub use bump::create_bump;
pub use reminder::create_reminder;
pub use setting::create_setting;
pub use user::{create_user, create_user_with_count};
