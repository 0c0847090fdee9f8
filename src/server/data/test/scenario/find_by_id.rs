use super::*;

/// Tests finding a stored scenario.
///
/// Expected: Ok(Some) with matching title
#[tokio::test]
async fn finds_existing_scenario() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::scenario::ScenarioFactory::new(db)
        .title("Stored")
        .build()
        .await?;

    let scenario = ScenarioRepository::new(db).find_by_id(&created.id).await?;

    assert_eq!(scenario.map(|s| s.title), Some("Stored".to_string()));

    Ok(())
}

/// Tests finding an unknown scenario.
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

    assert!(ScenarioRepository::new(db)
        .find_by_id("sce-missing")
        .await?
        .is_none());

    Ok(())
}
