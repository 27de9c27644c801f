use super::*;

use crate::server::model::inventory::SHELF_LIFE_DAYS;

/// Tests recording a unit for an existing donor.
///
/// Verifies that the unit is stored with the computed expiry date and that
/// the donor's last-donation date is refreshed to the collection date.
///
/// Expected: Ok with donor_updated true
#[tokio::test]
async fn refreshes_donor_last_donation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::create_donor(db).await?;
    let collection_date = Utc::now() - Duration::days(1);

    let service = InventoryService::new(db);
    let recorded = service
        .record_unit(CreateBloodUnitParams::from_dto(CreateBloodUnitDto {
            blood_type: "O-".to_string(),
            donor_id: donor.id,
            collection_date,
        }))
        .await?;

    assert!(recorded.donor_updated);
    assert_eq!(recorded.unit.donor_id, donor.id);
    assert_eq!(recorded.unit.status, UnitStatus::Available);
    assert_eq!(
        recorded.unit.expiry_date,
        collection_date + Duration::days(SHELF_LIFE_DAYS)
    );

    // Verify the donor refresh is persisted
    let stored = entity::prelude::Donor::find_by_id(donor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_donation, Some(collection_date));

    Ok(())
}

/// Tests recording a unit for a donor that does not exist.
///
/// The unit insert is authoritative; the missing donor is reported through
/// `donor_updated` rather than failing the operation.
///
/// Expected: Ok with donor_updated false and the unit persisted
#[tokio::test]
async fn succeeds_for_unknown_donor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .with_table(entity::prelude::BloodUnit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = InventoryService::new(db);
    let recorded = service
        .record_unit(CreateBloodUnitParams::from_dto(CreateBloodUnitDto {
            blood_type: "AB+".to_string(),
            donor_id: 999999,
            collection_date: Utc::now(),
        }))
        .await?;

    assert!(!recorded.donor_updated);

    // Verify the unit itself is persisted
    let stored = entity::prelude::BloodUnit::find_by_id(recorded.unit.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
