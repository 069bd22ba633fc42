use super::*;

/// Tests the leaderboard with nobody recorded.
///
/// Expected: Ok with no entries and a total of zero
#[tokio::test]
async fn empty_when_nobody_has_bumped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaderboard = BumpQueryService::new(db).get_leaderboard().await?;

    assert!(leaderboard.is_empty());
    assert_eq!(leaderboard.total_bumps, 0);

    Ok(())
}

/// Tests the leaderboard cut-off and server total.
///
/// Verifies only the top five users are listed, highest first, while the total counts
/// every user.
///
/// Expected: Ok with 5 entries and a total over all 7 users
#[tokio::test]
async fn lists_top_five_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let counts = [("1", 4), ("2", 10), ("3", 1), ("4", 7), ("5", 2), ("6", 3), ("7", 20)];
    for (user_id, count) in counts {
        factory::create_user_with_count(db, user_id, count).await?;
    }

    let leaderboard = BumpQueryService::new(db).get_leaderboard().await?;

    let ranked: Vec<(u64, i32)> = leaderboard
        .entries
        .iter()
        .map(|u| (u.user_id, u.bump_count))
        .collect();
    assert_eq!(ranked, vec![(7, 20), (2, 10), (4, 7), (1, 4), (6, 3)]);
    assert_eq!(leaderboard.total_bumps, 47);

    Ok(())
}
