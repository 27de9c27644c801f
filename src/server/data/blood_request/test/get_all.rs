use super::*;

/// Tests listing requests ordered by submission time.
///
/// Verifies that requests come back most recently submitted first regardless
/// of insertion order.
///
/// Expected: Ok with requests newest first
#[tokio::test]
async fn returns_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BloodRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let middle = factory::blood_request::BloodRequestFactory::new(db)
        .request_date(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::blood_request::BloodRequestFactory::new(db)
        .request_date(now - Duration::hours(1))
        .build()
        .await?;
    let oldest = factory::blood_request::BloodRequestFactory::new(db)
        .request_date(now - Duration::hours(3))
        .build()
        .await?;

    let repo = BloodRequestRepository::new(db);
    let requests = repo.get_all().await?;

    let ids: Vec<i32> = requests.iter().map(|request| request.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}
