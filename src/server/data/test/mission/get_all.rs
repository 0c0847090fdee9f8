use super::*;

/// Tests listing missions ordered by date.
///
/// Expected: Ok with the earliest mission first
#[tokio::test]
async fn lists_missions_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = factory::mission::MissionFactory::new(db)
        .place("Later")
        .date(Utc::now() + Duration::days(2))
        .build()
        .await?;
    let sooner = factory::mission::MissionFactory::new(db)
        .place("Sooner")
        .date(Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let missions = MissionRepository::new(db).get_all().await?;

    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0].id, sooner.id);
    assert_eq!(missions[1].id, later.id);

    Ok(())
}

/// Tests listing with no missions stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(MissionRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
