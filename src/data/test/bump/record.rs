use super::*;

/// Tests recording the first bump of a user.
///
/// Verifies the user row is created with a count of one and the bump is logged.
///
/// Expected: Ok(Recorded { bump_count: 1 })
#[tokio::test]
async fn creates_user_on_first_bump() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpRepository::new(db);
    let outcome = repo.record(&signal(1, 42)).await?;

    assert_eq!(outcome, RecordBumpOutcome::Recorded { bump_count: 1 });
    assert_eq!(UserRepository::new(db).get_count(42).await?, 1);
    assert_eq!(repo.count_for_user(42).await?, 1);

    Ok(())
}

/// Tests that N distinct bumps by the same user produce a count of N.
///
/// Expected: Ok with the final count equal to the number of bumps
#[tokio::test]
async fn counts_every_distinct_bump() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpRepository::new(db);
    let mut last = None;
    for message_id in 1..=12 {
        last = Some(repo.record(&signal(message_id, 42)).await?);
    }

    assert_eq!(last, Some(RecordBumpOutcome::Recorded { bump_count: 12 }));
    assert_eq!(UserRepository::new(db).get_count(42).await?, 12);
    assert_eq!(repo.count_for_user(42).await?, 12);

    Ok(())
}

/// Tests recording the same reply message twice.
///
/// Verifies the second attempt is reported as a duplicate and leaves the count alone.
///
/// Expected: Ok(AlreadyRecorded { bump_count: 1 }) on the second call
#[tokio::test]
async fn ignores_already_recorded_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpRepository::new(db);
    repo.record(&signal(7, 42)).await?;
    let second = repo.record(&signal(7, 42)).await?;

    assert_eq!(second, RecordBumpOutcome::AlreadyRecorded { bump_count: 1 });
    assert!(!second.is_new());
    assert_eq!(UserRepository::new(db).get_count(42).await?, 1);

    Ok(())
}

/// Tests that bumps by different users are counted separately.
///
/// Expected: Ok with independent counts per user
#[tokio::test]
async fn keeps_counts_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpRepository::new(db);
    repo.record(&signal(1, 10)).await?;
    repo.record(&signal(2, 20)).await?;
    repo.record(&signal(3, 10)).await?;

    let users = UserRepository::new(db);
    assert_eq!(users.get_count(10).await?, 2);
    assert_eq!(users.get_count(20).await?, 1);

    Ok(())
}

/// Tests that a failed write leaves no partial state.
///
/// Without the users table recording fails partway through the transaction; no
/// bump log row may survive the failure.
///
/// Expected: Err, and the bump is not logged
#[tokio::test]
async fn rolls_back_log_when_count_update_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BumpRepository::new(db);
    let result = repo.record(&signal(1, 42)).await;

    assert!(result.is_err());
    assert_eq!(repo.count_for_user(42).await?, 0);

    Ok(())
}

/// Tests that existing log rows for other users do not affect a new bump.
///
/// Expected: Ok(Recorded { bump_count: 1 }) and per-user log counts kept apart
#[tokio::test]
async fn other_users_log_rows_are_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    test_utils::factory::create_bump(db, "7").await?;
    test_utils::factory::create_bump(db, "7").await?;

    let repo = BumpRepository::new(db);
    let outcome = repo.record(&signal(1, 42)).await?;

    assert_eq!(outcome, RecordBumpOutcome::Recorded { bump_count: 1 });
    assert_eq!(repo.count_for_user(7).await?, 2);
    assert_eq!(repo.count_for_user(42).await?, 1);

    Ok(())
}

/// Tests two writers recording bumps for the same user at the same time.
///
/// Uses a file-backed pool so the writers hold separate connections. Every bump must be
/// recorded and the count must match the log.
///
/// Expected: no errors, count and log both 100
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_writers_lose_no_bumps() -> Result<(), DbErr> {
    let path = std::env::temp_dir().join(format!(
        "bumpkeeper-concurrent-record-{}.sqlite",
        std::process::id()
    ));
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Bump)
        .on_file(path)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let writers: Vec<_> = (0..2u64)
        .map(|writer| {
            let db = db.clone();
            tokio::spawn(async move {
                let repo = BumpRepository::new(&db);
                let mut failures = 0;
                for n in 1..=50 {
                    if repo.record(&signal(writer * 1000 + n, 42)).await.is_err() {
                        failures += 1;
                    }
                }
                failures
            })
        })
        .collect();

    let mut failures = 0;
    for writer in writers {
        failures += writer.await.unwrap();
    }

    assert_eq!(failures, 0);
    assert_eq!(UserRepository::new(db).get_count(42).await?, 100);
    assert_eq!(BumpRepository::new(db).count_for_user(42).await?, 100);

    Ok(())
}
