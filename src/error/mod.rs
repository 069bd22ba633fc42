//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so the liveness endpoints can surface failures as HTTP statuses.

pub mod command;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Halts startup; the bot cannot run without its credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Slash command rejection shown to the invoking user.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Internal invariant violation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure from the liveness server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Only the liveness endpoints produce HTTP responses. A database failure maps to
/// 503 so uptime monitors see the bot as degraded; everything else is a 500. The
/// error itself is logged and never returned to the caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        match self {
            Self::DbErr(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response(),
        }
    }
}
