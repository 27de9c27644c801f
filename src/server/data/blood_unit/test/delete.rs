use super::*;

/// Tests deleting an existing unit.
///
/// Expected: Ok with unit removed from the database
#[tokio::test]
async fn deletes_existing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_blood_unit(db, 1).await?;

    let repo = BloodUnitRepository::new(db);
    let result = repo.delete(unit.id).await;

    assert!(result.is_ok());
    let stored = entity::prelude::BloodUnit::find_by_id(unit.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a unit that does not exist.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_nonexistent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodUnitRepository::new(db);
    let result = repo.delete(424242).await;

    assert!(result.is_ok());

    Ok(())
}
