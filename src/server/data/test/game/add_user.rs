use super::*;

/// Tests appending a new user to a game's roster.
///
/// Expected: Ok(true) and the user stored with their character
#[tokio::test]
async fn appends_user_to_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_game_with_users(db, "gm", &["alice"]).await?;

    let repo = GameRepository::new(db);
    let bob = participant("bob");
    assert!(repo.add_user(&game.id, &bob).await?);

    let stored = repo.find_by_id(&game.id).await?.unwrap();
    assert_eq!(stored.users.len(), 2);
    assert_eq!(stored.users[1], bob);

    Ok(())
}

/// Tests adding a user who is already on the roster.
///
/// Expected: Ok(false) and the roster unchanged
#[tokio::test]
async fn ignores_duplicate_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_game_with_users(db, "gm", &["alice"]).await?;

    let repo = GameRepository::new(db);
    let before = repo.find_by_id(&game.id).await?.unwrap();

    assert!(!repo.add_user(&game.id, &participant("alice")).await?);

    let after = repo.find_by_id(&game.id).await?.unwrap();
    assert_eq!(after.users, before.users);

    Ok(())
}

/// Tests adding a user to a game that does not exist.
///
/// Expected: Err due to the roster foreign key
#[tokio::test]
async fn fails_for_unknown_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db)
        .add_user("g-missing", &participant("alice"))
        .await;

    assert!(result.is_err());

    Ok(())
}
