use super::*;

/// Tests loading a game together with its roster in join order.
///
/// Expected: Ok(Some) with users ordered as they joined
#[tokio::test]
async fn loads_roster_in_join_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_game_with_users(db, "gm", &["alice", "bob"]).await?;

    let found = GameRepository::new(db).find_by_id(&game.id).await?.unwrap();

    let ids: Vec<&str> = found.users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["alice", "bob"]);
    assert_eq!(
        found.users[0].character.as_ref().map(|c| c.cover_name.as_str()),
        Some("Agent alice")
    );
    assert_eq!(found.gm.id, "gm");

    Ok(())
}

/// Tests loading a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(GameRepository::new(db).find_by_id("g-missing").await?.is_none());

    Ok(())
}
