use sea_orm::DatabaseConnection;

use crate::{
    data::{bump::BumpRepository, setting::SettingRepository},
    error::{command::CommandError, AppError},
    model::{
        message::InboundMessage,
        scan::{ScanOutcome, ScanReport},
    },
    service::detector::{BumpDetector, Detection},
};

/// One-time reconciliation of bumps that happened before the bot was watching.
pub struct ScanService<'a> {
    db: &'a DatabaseConnection,
    detector: BumpDetector,
}

impl<'a> ScanService<'a> {
    pub fn new(db: &'a DatabaseConnection, detector: BumpDetector) -> Self {
        Self { db, detector }
    }

    /// Checks whether a scan may start, before any history is fetched.
    ///
    /// # Arguments
    /// - `invoker_is_admin` - Whether the invoking member has the administrator permission
    ///
    /// # Returns
    /// - `Ok(())` - Scan may proceed
    /// - `Err(AppError::CommandErr(MissingPermission))` - Invoker is not an administrator
    /// - `Err(AppError::CommandErr(ScanAlreadyCompleted))` - Scan already ran on this deployment
    pub async fn authorize(&self, invoker_is_admin: bool) -> Result<(), AppError> {
        if !invoker_is_admin {
            return Err(CommandError::MissingPermission.into());
        }

        self.ensure_not_completed().await
    }

    /// Counts the bumps found in `history` that are not counted yet.
    ///
    /// Messages are processed oldest-first regardless of the order given. Bumps already in
    /// the bump log are skipped. The completion flag is set only when at least one bump was
    /// found, so an empty window can be retried with a larger limit. No reminder is scheduled.
    ///
    /// # Arguments
    /// - `history` - Channel messages to inspect
    ///
    /// # Returns
    /// - `Ok(ScanOutcome::Completed)` - Bumps found; the scan is now locked
    /// - `Ok(ScanOutcome::NothingFound)` - No bumps found; flag left unset
    /// - `Err(AppError::CommandErr(ScanAlreadyCompleted))` - Scan already ran
    /// - `Err(AppError::DbErr)` - Database error; bumps recorded so far stay recorded
    pub async fn scan(&self, mut history: Vec<InboundMessage>) -> Result<ScanOutcome, AppError> {
        self.ensure_not_completed().await?;

        history.sort_by_key(|message| (message.timestamp, message.message_id));

        let bump_repo = BumpRepository::new(self.db);
        let mut report = ScanReport {
            scanned: history.len(),
            ..ScanReport::default()
        };

        for message in &history {
            match self.detector.detect(message) {
                Detection::Bump(signal) => {
                    report.detected += 1;

                    if bump_repo.record(&signal).await?.is_new() {
                        report.recorded += 1;
                    } else {
                        report.already_counted += 1;
                    }
                }
                Detection::Ambiguous(reason) => {
                    tracing::debug!(
                        "Skipping message {} during scan: {}",
                        message.message_id,
                        reason
                    );
                }
                Detection::NotABump => {}
            }
        }

        if report.detected == 0 {
            tracing::info!("History scan found no bumps in {} messages", report.scanned);

            return Ok(ScanOutcome::NothingFound(report));
        }

        SettingRepository::new(self.db).mark_scan_completed().await?;

        tracing::info!(
            "History scan completed: {} bumps found, {} newly counted, {} already counted",
            report.detected,
            report.recorded,
            report.already_counted
        );

        Ok(ScanOutcome::Completed(report))
    }

    async fn ensure_not_completed(&self) -> Result<(), AppError> {
        if SettingRepository::new(self.db).is_scan_completed().await? {
            return Err(CommandError::ScanAlreadyCompleted.into());
        }

        Ok(())
    }
}
