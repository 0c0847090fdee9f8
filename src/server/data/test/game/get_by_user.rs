use super::*;

/// Tests that a user's games are exactly those they master or joined.
///
/// Expected: Ok with the mastered and joined games, never the unrelated one
#[tokio::test]
async fn returns_mastered_and_joined_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mastered = factory::create_game(db, "alice").await?;
    let (joined, _) = factory::helpers::create_game_with_users(db, "bob", &["alice"]).await?;
    let (unrelated, _) = factory::helpers::create_game_with_users(db, "carol", &["dave"]).await?;

    let games = GameRepository::new(db).get_by_user("alice").await?;

    let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(games.len(), 2);
    assert!(ids.contains(&mastered.id.as_str()));
    assert!(ids.contains(&joined.id.as_str()));
    assert!(!ids.contains(&unrelated.id.as_str()));
    assert!(games.iter().all(|g| g.involves("alice")));

    Ok(())
}

/// Tests a user that is in no game.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_uninvolved_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_game_with_users(db, "gm", &["alice"]).await?;

    assert!(GameRepository::new(db).get_by_user("mallory").await?.is_empty());

    Ok(())
}
