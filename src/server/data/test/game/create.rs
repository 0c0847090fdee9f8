use super::*;

/// Tests creating a game with a game master character.
///
/// Verifies the `g-` prefixed ID, `Waiting` status, empty roster and that the GM
/// character snapshot is persisted.
///
/// Expected: Ok with game created
#[tokio::test]
async fn creates_game_with_gm_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gm = participant("gm");
    let game = GameRepository::new(db)
        .create(&gm, Some("Opération Nocturne".to_string()))
        .await?;

    assert!(game.id.starts_with("g-"));
    assert_eq!(game.title.as_deref(), Some("Opération Nocturne"));
    assert_eq!(game.status, Status::Waiting);
    assert!(game.users.is_empty());
    assert!(game.missions.is_empty());
    assert_eq!(game.gm, gm);

    let row = entity::prelude::Game::find_by_id(game.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.gm_id, "gm");
    assert!(row.gm_character.is_some());

    Ok(())
}

/// Tests creating a game whose game master has no character.
///
/// Expected: Ok with no GM character stored
#[tokio::test]
async fn creates_game_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gm = Participant {
        id: "gm".to_string(),
        character: None,
    };
    let game = GameRepository::new(db).create(&gm, None).await?;

    assert!(game.title.is_none());
    assert!(game.gm.character.is_none());

    Ok(())
}
