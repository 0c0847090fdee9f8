use super::*;

/// Tests seeding an empty mission table.
///
/// Expected: Ok(Some) with the Eiffel Tower mission scheduled in the future
#[tokio::test]
async fn seeds_fixture_into_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MissionRepository::new(db);
    let seeded = repo.seed_fixtures().await?;

    let mission = seeded.unwrap();
    assert_eq!(mission.country, "France");
    assert_eq!(mission.place, "Eiffel Tower");
    assert!(mission.date > Utc::now() + Duration::hours(23));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that seeding leaves existing missions untouched.
///
/// Expected: Ok(None) and no additional rows
#[tokio::test]
async fn skips_seed_when_missions_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_mission(db).await?;

    let repo = MissionRepository::new(db);

    assert!(repo.seed_fixtures().await?.is_none());
    assert!(repo.seed_fixtures().await?.is_none());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
