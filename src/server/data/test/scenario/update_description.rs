use super::*;

/// Tests overwriting a scenario description.
///
/// Verifies that only the description changes and the update is persisted.
///
/// Expected: Ok with new description
#[tokio::test]
async fn overwrites_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::scenario::ScenarioFactory::new(db)
        .title("Original")
        .description(Some("Before".to_string()))
        .build()
        .await?;

    let repo = ScenarioRepository::new(db);
    let updated = repo
        .update_description(&created.id, "After".to_string())
        .await?;

    assert_eq!(updated.description.as_deref(), Some("After"));
    assert_eq!(updated.title, "Original");

    let stored = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(stored.description.as_deref(), Some("After"));

    Ok(())
}

/// Tests updating a scenario that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_scenario() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScenarioRepository::new(db)
        .update_description("sce-missing", "After".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
