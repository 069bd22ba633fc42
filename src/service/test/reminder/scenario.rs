use super::*;

fn bump_at(bumped_at: DateTime<Utc>) -> BumpSignal {
    BumpSignal {
        message_id: 9001,
        channel_id: CHANNEL,
        user_id: 42,
        bumped_at,
        source: BumpSource::Interaction,
    }
}

/// Tests the full bump-to-escalation lifecycle through the worker.
///
/// User bumps at T0, a poll at T0+2h01m sends the first nudge and a poll at T0+2h31m
/// escalates and clears the reminder.
///
/// Expected: count 1, reminder at T0+2h, then first nudge, then escalation mentioning the user
#[tokio::test]
async fn bump_then_nudge_then_escalation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = instant_worker(db, notifier.clone());
    let t0 = due_time();

    worker.handle(BotEvent::Bump(bump_at(t0))).await;

    assert_eq!(UserRepository::new(db).get_count(42).await?, 1);
    let reminder = ReminderRepository::new(db).get().await?.unwrap();
    assert_eq!(reminder.remind_at, t0 + BUMP_COOLDOWN);
    assert_eq!(reminder.status, ReminderStatus::Waiting);
    let after_bump = notifier.messages().len();

    worker
        .handle(BotEvent::Tick(t0 + Duration::minutes(121)))
        .await;

    let contents = notifier.contents();
    assert_eq!(contents.len(), after_bump + 1);
    assert_eq!(contents[after_bump], FIRST_NUDGE_MESSAGE);
    let reminder = ReminderRepository::new(db).get().await?.unwrap();
    assert_eq!(reminder.status, ReminderStatus::NotifiedFirst);

    worker
        .handle(BotEvent::Tick(t0 + Duration::minutes(151)))
        .await;

    let contents = notifier.contents();
    assert_eq!(contents.len(), after_bump + 2);
    assert!(contents[after_bump + 1].contains("<@42>"));
    assert!(ReminderRepository::new(db).get().await?.is_none());

    Ok(())
}

/// Tests that the worker applies events from the channel in order and stops when the
/// senders are gone.
///
/// Expected: both bumps counted and `run` returns after the channel closes
#[tokio::test]
async fn run_drains_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = instant_worker(db, notifier.clone());
    let (events_tx, events_rx) = tokio::sync::mpsc::channel(8);

    events_tx
        .send(BotEvent::Bump(bump_at(due_time())))
        .await
        .unwrap();
    events_tx
        .send(BotEvent::Bump(BumpSignal {
            message_id: 9002,
            ..bump_at(due_time() + BUMP_COOLDOWN)
        }))
        .await
        .unwrap();
    drop(events_tx);

    worker.run(events_rx).await;

    assert_eq!(UserRepository::new(db).get_count(42).await?, 2);
    assert_eq!(BumpRepository::new(db).count_for_user(42).await?, 2);

    Ok(())
}
