use super::*;

/// Tests the reminder query with nothing scheduled.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_without_reminder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BumpQueryService::new(db).next_reminder().await?.is_none());

    Ok(())
}

/// Tests the reminder query with a pending reminder.
///
/// Expected: Ok(Some) with the stored time and status
#[tokio::test]
async fn returns_pending_reminder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let remind_at = Utc::now() + Duration::minutes(45);
    factory::reminder::ReminderFactory::new(db)
        .channel_id("700")
        .remind_at(remind_at)
        .build()
        .await?;

    let reminder = BumpQueryService::new(db).next_reminder().await?.unwrap();

    assert_eq!(reminder.channel_id, 700);
    assert_eq!(reminder.remind_at.timestamp(), remind_at.timestamp());
    assert_eq!(reminder.status, ReminderStatus::Waiting);

    Ok(())
}
