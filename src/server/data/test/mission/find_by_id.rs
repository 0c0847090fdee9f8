use super::*;

/// Tests finding an existing mission.
///
/// Expected: Ok(Some) with the stored mission
#[tokio::test]
async fn finds_existing_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_mission(db).await?;

    let repo = MissionRepository::new(db);
    let mission = repo.find_by_id(&created.id).await?;

    assert!(mission.is_some());
    assert_eq!(mission.unwrap().place, created.place);

    Ok(())
}

/// Tests finding a mission that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MissionRepository::new(db);

    assert!(repo.find_by_id("mis-missing").await?.is_none());

    Ok(())
}
