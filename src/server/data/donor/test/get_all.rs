use super::*;

/// Tests listing donors ordered by registration time.
///
/// Verifies that donors come back most recently registered first regardless
/// of insertion order.
///
/// Expected: Ok with donors newest first
#[tokio::test]
async fn returns_donors_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    // Inserted out of timestamp order to catch accidental id ordering
    let middle = factory::donor::DonorFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::donor::DonorFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let oldest = factory::donor::DonorFactory::new(db)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;

    let repo = DonorRepository::new(db);
    let donors = repo.get_all().await?;

    let ids: Vec<i32> = donors.iter().map(|donor| donor.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests listing donors when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_donors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let donors = repo.get_all().await?;

    assert!(donors.is_empty());

    Ok(())
}
