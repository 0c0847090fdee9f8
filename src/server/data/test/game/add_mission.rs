use super::*;

/// Tests attaching a mission snapshot to a game.
///
/// Expected: Ok(true) and the mission listed on the game
#[tokio::test]
async fn attaches_mission_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db, "gm").await?;
    let mission = Mission::from_entity(factory::create_mission(db).await?);

    let repo = GameRepository::new(db);
    assert!(repo.add_mission(&game.id, &mission).await?);

    let stored = repo.find_by_id(&game.id).await?.unwrap();
    assert_eq!(stored.missions, vec![mission]);

    Ok(())
}

/// Tests attaching the same mission twice.
///
/// Expected: Ok(false) on the second attach and a single stored copy
#[tokio::test]
async fn ignores_already_attached_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db, "gm").await?;
    let mission = Mission::from_entity(factory::create_mission(db).await?);

    let repo = GameRepository::new(db);
    assert!(repo.add_mission(&game.id, &mission).await?);
    assert!(!repo.add_mission(&game.id, &mission).await?);

    let stored = repo.find_by_id(&game.id).await?.unwrap();
    assert_eq!(stored.missions.len(), 1);

    Ok(())
}
