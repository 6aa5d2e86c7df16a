use super::*;

/// Tests registering a user.
///
/// Expected: Ok with the user retrievable by email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Ada Lovelace");

    let found = repo.find_by_email("ada@example.com").await?;
    assert_eq!(found, Some(user.clone()));
    assert!(repo.exists(user.id).await?);

    Ok(())
}
