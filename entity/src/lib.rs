//! SeaORM entity models for the bump tracker schema.

pub mod prelude;

pub mod bump;
pub mod reminder;
pub mod setting;
pub mod user;
