use chrono::Utc;
use tokio::sync::mpsc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::{internal::InternalError, AppError},
    model::event::BotEvent,
};

/// Every minute, on the minute.
const REMINDER_POLL_SCHEDULE: &str = "0 * * * * *";

/// Starts the reminder poll scheduler
///
/// The job never touches the database itself. Each run queues a `BotEvent::Tick` for the
/// bump worker, which advances the reminder state machine in order with live bumps.
///
/// # Arguments
/// - `events`: Sender for the bump worker's event queue
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
pub async fn start_scheduler(events: mpsc::Sender<BotEvent>) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(REMINDER_POLL_SCHEDULE, move |_uuid, _lock| {
        let events = events.clone();

        Box::pin(async move {
            if events.send(BotEvent::Tick(Utc::now())).await.is_err() {
                tracing::error!(
                    "Failed to queue reminder poll: {}",
                    InternalError::EventChannelClosed
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reminder poll scheduler started");

    Ok(scheduler)
}
