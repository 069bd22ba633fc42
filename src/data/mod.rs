//! Database repository layer.
//!
//! Repositories hold a borrowed `DatabaseConnection` (the shared pool) and perform all
//! queries, inserts, updates and deletes. They use SeaORM entity models internally and
//! return domain models so the service layer never sees storage representations such as
//! string-encoded Discord IDs.

pub mod bump;
pub mod reminder;
pub mod setting;
pub mod user;

#[cfg(test)]
mod test;
