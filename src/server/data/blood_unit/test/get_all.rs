use super::*;

/// Tests listing units ordered by recording time.
///
/// Verifies that units come back most recently recorded first regardless of
/// insertion order.
///
/// Expected: Ok with units newest first
#[tokio::test]
async fn returns_units_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let middle = factory::blood_unit::BloodUnitFactory::new(db, 1)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::blood_unit::BloodUnitFactory::new(db, 1)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let oldest = factory::blood_unit::BloodUnitFactory::new(db, 1)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;

    let repo = BloodUnitRepository::new(db);
    let units = repo.get_all().await?;

    let ids: Vec<i32> = units.iter().map(|unit| unit.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that an unrecognized stored status surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blood_unit::BloodUnitFactory::new(db, 1)
        .status("Discarded")
        .build()
        .await?;

    let repo = BloodUnitRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
