use super::*;

/// Tests posting a comment.
///
/// Expected: Ok with an unedited comment
#[tokio::test]
async fn creates_unedited_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_published_event_with_dependencies(db).await?;
    let author = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(author.id, event.id, "See you there".to_string(), time::now())
        .await?;

    assert_eq!(comment.text, "See you there");
    assert_eq!(comment.author_id, author.id);
    assert!(!comment.updated);
    assert_eq!(repo.get_by_id(comment.id).await?, Some(comment));

    Ok(())
}
