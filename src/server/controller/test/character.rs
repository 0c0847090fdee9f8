use super::*;

/// Tests listing character images over HTTP.
///
/// Expected: 200 with URLs built from the Host header
#[tokio::test]
async fn lists_character_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = tempfile::tempdir().unwrap();
    for name in ["a.png", "b.txt", "C.JPG"] {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }

    let (status, body) = send(
        state(db, StubNewsSource::empty(), dir.path()),
        get("/api/character-images"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            "http://localhost:3000/images/characters/C.JPG",
            "http://localhost:3000/images/characters/a.png"
        ])
    );

    Ok(())
}

/// Tests listing when the image directory is missing.
///
/// Expected: 500 with the generic message
#[tokio::test]
async fn missing_image_directory_is_internal_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");

    let (status, body) = send(
        state(db, StubNewsSource::empty(), &missing),
        get("/api/character-images"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));

    Ok(())
}
