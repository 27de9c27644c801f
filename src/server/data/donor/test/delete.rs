use super::*;

/// Tests deleting an existing donor.
///
/// Expected: Ok with donor removed from the database
#[tokio::test]
async fn deletes_existing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::create_donor(db).await?;

    let repo = DonorRepository::new(db);
    let result = repo.delete(donor.id).await;

    assert!(result.is_ok());
    let stored = entity::prelude::Donor::find_by_id(donor.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a donor that does not exist.
///
/// The delete is not checked for a match, so a nonexistent identifier is
/// indistinguishable from a successful delete.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_nonexistent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let result = repo.delete(424242).await;

    assert!(result.is_ok());

    Ok(())
}
