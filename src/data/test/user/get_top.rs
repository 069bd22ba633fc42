use super::*;

/// Tests that the leaderboard query orders users by count, highest first.
///
/// Expected: Ok with users sorted descending by bump count
#[tokio::test]
async fn orders_by_count_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_count(db, "1", 3).await?;
    factory::create_user_with_count(db, "2", 12).await?;
    factory::create_user_with_count(db, "3", 7).await?;

    let repo = UserRepository::new(db);
    let top = repo.get_top(5).await.unwrap();

    let ids: Vec<u64> = top.iter().map(|user| user.user_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(top[0].bump_count, 12);

    Ok(())
}

/// Tests that the leaderboard query respects the limit.
///
/// Expected: Ok with exactly `limit` users, the highest counts kept
#[tokio::test]
async fn truncates_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, count) in [("1", 1), ("2", 2), ("3", 3), ("4", 4), ("5", 5), ("6", 6)] {
        factory::create_user_with_count(db, id, count).await?;
    }

    let repo = UserRepository::new(db);
    let top = repo.get_top(5).await.unwrap();

    assert_eq!(top.len(), 5);
    assert!(top.iter().all(|user| user.user_id != 1));

    Ok(())
}

/// Tests the leaderboard query with no users.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_nobody_bumped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let top = repo.get_top(5).await.unwrap();

    assert!(top.is_empty());

    Ok(())
}
