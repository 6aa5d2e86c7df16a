use super::*;

/// Tests deleting a compilation with linked events.
///
/// Expected: Ok(true), links removed, events kept
#[tokio::test]
async fn deletes_compilation_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let compilation = CompilationFactory::new(db)
        .events(vec![event.id])
        .build()
        .await?;

    let repo = CompilationRepository::new(db);
    assert!(repo.delete(compilation.id).await?);

    assert!(repo.get_by_id(compilation.id).await?.is_none());
    assert_eq!(
        entity::prelude::CompilationEvent::find().count(db).await?,
        0
    );
    assert_eq!(entity::prelude::Event::find().count(db).await?, 1);

    assert!(!repo.delete(compilation.id).await?);

    Ok(())
}
