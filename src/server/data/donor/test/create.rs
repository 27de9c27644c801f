use super::*;

/// Tests registering a new donor.
///
/// Verifies that the repository inserts a donor record with the provided
/// contact fields, a generated identifier, a creation timestamp, and no
/// last-donation date.
///
/// Expected: Ok with donor created
#[tokio::test]
async fn creates_donor_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Donor)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let result = repo
        .create(CreateDonorParams {
            name: "Alex Moreau".to_string(),
            blood_type: "B+".to_string(),
            phone: "555-0100".to_string(),
            email: "alex@example.com".to_string(),
            address: "12 Harbor Rd".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let donor = result.unwrap();
    assert!(donor.id > 0);
    assert_eq!(donor.name, "Alex Moreau");
    assert_eq!(donor.blood_type, "B+");
    assert!(donor.last_donation.is_none());

    // Verify donor exists in database
    let stored = entity::prelude::Donor::find_by_id(donor.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().email, "alex@example.com");

    Ok(())
}
