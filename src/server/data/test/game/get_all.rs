use super::*;

/// Tests listing every game with its own roster.
///
/// Expected: Ok with rosters kept separate per game
#[tokio::test]
async fn lists_games_with_rosters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_game_with_users(db, "gm-1", &["alice"]).await?;
    let (second, _) =
        factory::helpers::create_game_with_users(db, "gm-2", &["bob", "carol"]).await?;

    let games = GameRepository::new(db).get_all().await?;

    assert_eq!(games.len(), 2);
    let first = games.iter().find(|g| g.id == first.id).unwrap();
    let second = games.iter().find(|g| g.id == second.id).unwrap();
    assert_eq!(first.users.len(), 1);
    assert_eq!(second.users.len(), 2);

    Ok(())
}

/// Tests listing with no games stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(GameRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
