use super::*;

/// Tests editing a comment.
///
/// Expected: Ok with the new text and the edited flag set
#[tokio::test]
async fn replaces_text_and_marks_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let comment = factory::create_comment(db, user.id, event.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.update_text(comment.id, "Edited".to_string()).await?;

    assert_eq!(updated.text, "Edited");
    assert!(updated.updated);
    assert_eq!(updated.created, comment.created);

    Ok(())
}

/// Tests editing a comment that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo.update_text(3, "Edited".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
