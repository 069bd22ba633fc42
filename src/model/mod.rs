//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and carry
//! Discord IDs as `u64` rather than the `String` representation used in storage. Pure
//! decision logic that only depends on a model's own fields (such as which reminder stage
//! is due) lives alongside the model.

pub mod bump;
pub mod event;
pub mod leaderboard;
pub mod message;
pub mod reminder;
pub mod scan;
pub mod user;
