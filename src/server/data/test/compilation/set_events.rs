use super::*;

/// Tests replacing the event links of a compilation.
///
/// Expected: Ok with only the new events linked
#[tokio::test]
async fn replaces_linked_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, user.id, category.id).await?;
    let third = factory::create_event(db, user.id, category.id).await?;
    let compilation = CompilationFactory::new(db)
        .events(vec![first.id, second.id])
        .build()
        .await?;

    let repo = CompilationRepository::new(db);
    repo.set_events(compilation.id, vec![third.id, second.id])
        .await?;

    let links = repo.get_event_ids(vec![compilation.id]).await?;
    assert_eq!(links.get(&compilation.id), Some(&vec![second.id, third.id]));

    Ok(())
}

/// Tests clearing the event links.
///
/// Expected: Ok with no links left
#[tokio::test]
async fn clears_linked_events() -> Result<(), DbErr> {
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
    repo.set_events(compilation.id, Vec::new()).await?;

    assert_eq!(
        entity::prelude::CompilationEvent::find().count(db).await?,
        0
    );

    Ok(())
}
