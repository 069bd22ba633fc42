use super::*;

/// Tests summing bump counts across users.
///
/// Expected: Ok with the sum of all counts
#[tokio::test]
async fn sums_all_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_count(db, "1", 4).await?;
    factory::create_user_with_count(db, "2", 6).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.total_bumps().await?, 10);

    Ok(())
}

/// Tests the total with an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_zero_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.total_bumps().await?, 0);

    Ok(())
}
