use super::*;

/// Tests creating a mission.
///
/// Verifies that the repository assigns a `mis-` prefixed ID and the default
/// `Waiting` status.
///
/// Expected: Ok with mission created
#[tokio::test]
async fn creates_mission_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now() + Duration::days(3);
    let repo = MissionRepository::new(db);
    let mission = repo
        .create(CreateMissionParam {
            country: "Italy".to_string(),
            place: "Colosseum".to_string(),
            date,
            scenario: None,
        })
        .await?;

    assert!(mission.id.starts_with("mis-"));
    assert_eq!(mission.country, "Italy");
    assert_eq!(mission.place, "Colosseum");
    assert_eq!(mission.date, date);
    assert_eq!(mission.status, Status::Waiting);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
