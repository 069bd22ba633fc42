use super::*;

/// Tests reading the count of a user who has bumped.
///
/// Expected: Ok with the stored count
#[tokio::test]
async fn returns_stored_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_count(db, "111111111111111111", 7).await?;

    let repo = UserRepository::new(db);
    let count = repo.get_count(111111111111111111).await?;

    assert_eq!(count, 7);

    Ok(())
}

/// Tests reading the count of a user with no record.
///
/// Expected: Ok(0) rather than an error or None
#[tokio::test]
async fn defaults_to_zero_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let count = repo.get_count(999).await?;

    assert_eq!(count, 0);

    Ok(())
}
