mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc;

use crate::{
    config::Config,
    error::AppError,
    scheduler::worker::BumpWorker,
    service::{detector::BumpDetector, notifier::DiscordNotifier, reward::RewardPacing},
    state::AppState,
};

/// Bumps and polls waiting for the worker; only fills up if the database stalls.
const EVENT_QUEUE_CAPACITY: usize = 64;

/// How long shutdown waits for the worker to finish queued events.
const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);

    // Initialize Discord bot and extract HTTP client
    let bot_client = bot::start::init_bot(&config, db.clone(), events_tx.clone()).await?;
    let discord_http = bot_client.http.clone();
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let worker = BumpWorker::new(
        db.clone(),
        Arc::new(DiscordNotifier::new(discord_http)),
        BumpDetector::new(config.bump_bot_id),
        RewardPacing::default(),
    );
    let worker_handle = tokio::spawn(worker.run(events_rx));

    let mut scheduler = scheduler::reminder::start_scheduler(events_tx).await?;

    let listener =
        tokio::net::TcpListener::bind((config.bind_address.as_str(), config.port)).await?;
    tracing::info!("Liveness server listening on {}", listener.local_addr()?);

    axum::serve(listener, router::router().with_state(AppState::new(db.clone())))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Shutting down");

    // Stopping the shards drops the event handler and with it the gateway's event sender
    shard_manager.shutdown_all().await;
    scheduler.shutdown().await?;
    drop(scheduler);

    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker_handle).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Bump worker panicked: {}", e),
        Err(_) => tracing::warn!("Bump worker did not finish queued events before shutdown"),
    }

    db.close().await?;

    Ok(())
}
