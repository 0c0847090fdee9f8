use super::*;

/// Tests listing every stored scenario.
///
/// Expected: Ok with all scenarios
#[tokio::test]
async fn lists_all_scenarios() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_scenario(db).await?;
    factory::create_scenario(db).await?;

    let scenarios = ScenarioRepository::new(db).get_all().await?;

    assert_eq!(scenarios.len(), 2);

    Ok(())
}
