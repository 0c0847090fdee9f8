use super::*;

/// Tests creating a scenario that is not linked to a mission.
///
/// Expected: Ok with a `sce-` prefixed ID
#[tokio::test]
async fn creates_unlinked_scenario() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let published_date = Utc::now() - Duration::hours(1);
    let scenario = ScenarioRepository::new(db)
        .create(CreateScenarioParam {
            title: "Headline".to_string(),
            description: Some("Body".to_string()),
            source: "https://news.example/a".to_string(),
            published_date,
            mission_id: None,
        })
        .await?;

    assert!(scenario.id.starts_with("sce-"));
    assert_eq!(scenario.title, "Headline");
    assert_eq!(scenario.description.as_deref(), Some("Body"));
    assert_eq!(scenario.source, "https://news.example/a");
    assert_eq!(scenario.published_date, published_date);
    assert!(scenario.mission_id.is_none());

    Ok(())
}

/// Tests creating a scenario linked to an existing mission.
///
/// Expected: Ok with the mission reference stored
#[tokio::test]
async fn creates_scenario_linked_to_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mission = factory::create_mission(db).await?;

    let scenario = ScenarioRepository::new(db)
        .create(CreateScenarioParam {
            title: "Linked".to_string(),
            description: None,
            source: "https://news.example/b".to_string(),
            published_date: Utc::now(),
            mission_id: Some(mission.id.clone()),
        })
        .await?;

    assert_eq!(scenario.mission_id, Some(mission.id));

    Ok(())
}
