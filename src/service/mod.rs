//! Business logic between the Discord edge and the repositories.
//!
//! Services take a borrowed `DatabaseConnection` and, where they post to Discord, a
//! [`notifier::Notifier`]. They return `AppError` and leave logging of failures to the
//! caller, apart from failures they deliberately swallow.

pub mod bump;
pub mod detector;
pub mod notifier;
pub mod query;
pub mod reminder;
pub mod reward;
pub mod scan;

#[cfg(test)]
mod test;
