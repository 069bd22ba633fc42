//! The single consumer of bot events.
//!
//! Bumps and history scans from the gateway and reminder polls from the scheduler all
//! arrive here over one channel and are applied one at a time, so a poll can never observe
//! a half-processed bump and a scan never writes alongside a live bump.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    model::event::BotEvent,
    service::{
        bump::BumpService,
        detector::BumpDetector,
        notifier::Notifier,
        reminder::{ReminderService, TickOutcome},
        reward::RewardPacing,
        scan::ScanService,
    },
};

/// Applies bot events one at a time.
///
/// A bump holds the worker until its reward messages are posted, which with the default
/// pacing is about five seconds. Events queued behind it, reminder polls included, wait
/// that long. At one bump every two hours this delay is not noticeable.
pub struct BumpWorker {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    detector: BumpDetector,
    pacing: RewardPacing,
}

impl BumpWorker {
    /// Creates a new BumpWorker.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Sender for bump rewards and reminders
    /// - `detector` - Bump detector applied to scanned history
    /// - `pacing` - Delays between reward messages
    pub fn new(
        db: DatabaseConnection,
        notifier: Arc<dyn Notifier>,
        detector: BumpDetector,
        pacing: RewardPacing,
    ) -> Self {
        Self {
            db,
            notifier,
            detector,
            pacing,
        }
    }

    /// Applies events until every sender has been dropped.
    pub async fn run(self, mut events: mpsc::Receiver<BotEvent>) {
        tracing::info!("Bump worker started");

        while let Some(event) = events.recv().await {
            self.handle(event).await;
        }

        tracing::info!("Bump worker stopped");
    }

    /// Applies a single event. Failures are logged; the worker keeps running.
    pub async fn handle(&self, event: BotEvent) {
        match event {
            BotEvent::Bump(signal) => {
                let bump_service = BumpService::new(&self.db, self.notifier.as_ref(), self.pacing);

                if let Err(e) = bump_service.process(&signal).await {
                    tracing::error!(
                        "Failed to process bump by user {} in channel {}: {}",
                        signal.user_id,
                        signal.channel_id,
                        e
                    );
                }
            }
            BotEvent::Tick(now) => {
                let reminder_service = ReminderService::new(&self.db, self.notifier.as_ref());

                match reminder_service.tick(now).await {
                    Ok(TickOutcome::Idle) | Ok(TickOutcome::Pending) => {}
                    Ok(outcome) => tracing::debug!("Reminder poll at {}: {:?}", now, outcome),
                    Err(e) => tracing::error!("Failed to process reminder poll: {}", e),
                }
            }
            BotEvent::Scan { history, reply } => {
                let scan_service = ScanService::new(&self.db, self.detector);
                let outcome = scan_service.scan(history).await;

                if reply.send(outcome).is_err() {
                    tracing::warn!("History scan finished after its interaction stopped waiting");
                }
            }
        }
    }
}
