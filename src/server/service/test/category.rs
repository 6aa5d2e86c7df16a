use super::*;
use crate::server::{
    model::{category::CategoryNameParams, pagination::Pagination},
    service::category::CategoryService,
};
use test_utils::factory;

fn name(value: &str) -> CategoryNameParams {
    CategoryNameParams {
        name: value.to_string(),
    }
}

/// Tests that category names are unique.
///
/// Expected: Err(Conflict) for the second category with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    service.create(name("Music")).await?;
    let result = service.create(name("Music")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests renaming a category to its own current name.
///
/// Expected: Ok with the name unchanged
#[tokio::test]
async fn allows_renaming_to_same_name() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let category = service.create(name("Music")).await?;
    let renamed = service.update(category.id, name("Music")).await?;

    assert_eq!(renamed, category);

    Ok(())
}

/// Tests renaming a category to another category's name.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_renaming_to_taken_name() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    service.create(name("Music")).await?;
    let sport = service.create(name("Sport")).await?;

    let result = service.update(sport.id, name("Music")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let missing = service.update(999, name("Art")).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a category that events still use.
///
/// Expected: Err(Conflict) while referenced, NotFound for unknown ids
#[tokio::test]
async fn refuses_to_delete_used_category() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, category, _) = factory::helpers::create_event_with_dependencies(db).await?;
    let unused = factory::create_category(db).await?;

    let service = CategoryService::new(db);
    let result = service.delete(category.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    service.delete(unused.id).await?;
    assert!(matches!(
        service.get_by_id(unused.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(unused.id).await,
        Err(AppError::NotFound(_))
    ));

    let remaining = service.get_paginated(Pagination::default()).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}
