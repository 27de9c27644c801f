use super::*;

/// Tests submitting a new blood request.
///
/// Verifies that the repository inserts a request with the provided fields,
/// a generated identifier, and a request timestamp.
///
/// Expected: Ok with request created
#[tokio::test]
async fn creates_request_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodRequestRepository::new(db);
    let result = repo
        .create(CreateBloodRequestParams {
            patient_name: "Maria Chen".to_string(),
            blood_type: "A-".to_string(),
            units_needed: 3,
            priority: RequestPriority::Critical,
            hospital: "St. Vincent".to_string(),
            status: RequestStatus::Pending,
        })
        .await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert!(request.id > 0);
    assert_eq!(request.patient_name, "Maria Chen");
    assert_eq!(request.units_needed, 3);
    assert_eq!(request.priority, RequestPriority::Critical);
    assert_eq!(request.status, RequestStatus::Pending);

    // Verify request exists in database with the string-encoded enums
    let stored = entity::prelude::BloodRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.priority, "Critical");
    assert_eq!(stored.status, "Pending");

    Ok(())
}
