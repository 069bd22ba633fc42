use super::*;

/// Tests setting a reminder when none exists.
///
/// Expected: Ok with a single waiting reminder stored
#[tokio::test]
async fn stores_waiting_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let remind_at = Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap();

    let repo = ReminderRepository::new(db);
    let reminder = repo
        .set(SetReminderParam {
            channel_id: 500,
            remind_at,
        })
        .await
        .unwrap();

    assert_eq!(reminder.channel_id, 500);
    assert_eq!(reminder.remind_at, remind_at);
    assert_eq!(reminder.status, ReminderStatus::Waiting);
    assert_eq!(entity::prelude::Reminder::find().count(db).await?, 1);

    Ok(())
}

/// Tests that setting a reminder replaces every previous one.
///
/// Seeds two rows directly, then sets a new reminder; only the new one may remain.
///
/// Expected: Ok with exactly one row carrying the most recent time
#[tokio::test]
async fn replaces_existing_reminders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reminder::ReminderFactory::new(db)
        .status("notified_first")
        .build()
        .await?;
    factory::create_reminder(db).await?;

    let remind_at = Utc.with_ymd_and_hms(2025, 3, 1, 13, 0, 0).unwrap();
    let repo = ReminderRepository::new(db);
    repo.set(SetReminderParam {
        channel_id: 600,
        remind_at,
    })
    .await
    .unwrap();

    let rows = entity::prelude::Reminder::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].channel_id, "600");
    assert_eq!(rows[0].remind_at, remind_at);
    assert_eq!(rows[0].status, "waiting");

    Ok(())
}

/// Tests setting reminders back to back.
///
/// Expected: Ok with the last write winning
#[tokio::test]
async fn last_write_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap();

    let repo = ReminderRepository::new(db);
    for offset in 0..3 {
        repo.set(SetReminderParam {
            channel_id: 500,
            remind_at: first + Duration::minutes(offset),
        })
        .await
        .unwrap();
    }

    let reminder = repo.get().await.unwrap().unwrap();
    assert_eq!(reminder.remind_at, first + Duration::minutes(2));
    assert_eq!(entity::prelude::Reminder::find().count(db).await?, 1);

    Ok(())
}
