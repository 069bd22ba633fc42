use super::*;

/// Tests the per-user count for a recorded user.
///
/// Expected: Ok(stored count)
#[tokio::test]
async fn returns_stored_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_with_count(db, "42", 13).await?;

    assert_eq!(BumpQueryService::new(db).get_user_count(42).await?, 13);

    Ok(())
}

/// Tests the per-user count for a user who never bumped.
///
/// Expected: Ok(0)
#[tokio::test]
async fn defaults_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(BumpQueryService::new(db).get_user_count(42).await?, 0);

    Ok(())
}
