//! Events consumed by the bump worker.

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use super::{bump::BumpSignal, message::InboundMessage, scan::ScanOutcome};
use crate::error::AppError;

/// Inbound event for the single bump worker.
///
/// The gateway handler produces `Bump` and `Scan`, the cron scheduler produces `Tick`. All
/// of them are applied in arrival order by the same worker so state changes never
/// interleave.
#[derive(Debug)]
pub enum BotEvent {
    /// A bump was detected in a live message.
    Bump(BumpSignal),
    /// Periodic reminder poll at the given time.
    Tick(DateTime<Utc>),
    /// Channel history fetched for an administrator's scan.
    Scan {
        history: Vec<InboundMessage>,
        /// Receives the scan result for the waiting interaction
        reply: oneshot::Sender<Result<ScanOutcome, AppError>>,
    },
}
