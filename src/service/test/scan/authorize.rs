use super::*;

/// Tests an administrator starting the first scan.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_admin_before_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ScanService::new(db, detector()).authorize(true).await?;

    Ok(())
}

/// Tests a non-administrator starting a scan.
///
/// Expected: Err(CommandError::MissingPermission)
#[tokio::test]
async fn rejects_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScanService::new(db, detector()).authorize(false).await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::MissingPermission))
    ));
    assert!(!SettingRepository::new(db).is_scan_completed().await?);

    Ok(())
}

/// Tests an administrator starting a scan after it was completed.
///
/// Expected: Err(CommandError::ScanAlreadyCompleted)
#[tokio::test]
async fn rejects_after_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, "scan_completed", "true").await?;

    let result = ScanService::new(db, detector()).authorize(true).await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::ScanAlreadyCompleted))
    ));

    Ok(())
}
