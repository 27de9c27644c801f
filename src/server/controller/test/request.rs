use super::*;

use chrono::{Duration, Utc};

/// Tests submitting a blood request without an explicit status.
///
/// Expected: 201 Created with status defaulted to `Pending`
#[tokio::test]
async fn submits_request_with_default_status() {
    let (app, _test) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/requests",
        Some(json!({
            "patientName": "J. Okafor",
            "bloodType": "B-",
            "unitsNeeded": 2,
            "priority": "High",
            "hospital": "St. Anselm General",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert!(body["request"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["request"]["status"], json!("Pending"));
    assert_eq!(body["request"]["priority"], json!("High"));
    assert!(body["request"]["requestDate"].is_string());
}

/// Tests updating a request with a mistyped field.
///
/// Expected: 400 Bad Request with `success: false`
#[tokio::test]
async fn rejects_mistyped_body_with_error_envelope() {
    let (app, _test) = test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/requests/1",
        Some(json!({ "unitsNeeded": "three" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].is_string());
}

/// Tests listing blood requests through the API.
///
/// Expected: 200 OK with requests newest first
#[tokio::test]
async fn lists_requests_newest_first() {
    let (app, test) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let older = factory::blood_request::BloodRequestFactory::new(db)
        .request_date(Utc::now() - Duration::days(2))
        .build()
        .await
        .unwrap();
    let newer = factory::blood_request::BloodRequestFactory::new(db)
        .request_date(Utc::now() - Duration::days(1))
        .build()
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/api/requests", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|request| request["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newer.id as i64, older.id as i64]);
}

/// Tests updating the status of a request.
///
/// Verifies the update envelope carries the changed record, and that the
/// change is visible in the listing with the other fields untouched.
///
/// Expected: 200 OK with status `Fulfilled`
#[tokio::test]
async fn updates_request_status() {
    let (app, test) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let request = factory::blood_request::BloodRequestFactory::new(db)
        .patient_name("R. Castellanos")
        .status("Pending")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/requests/{}", request.id),
        Some(json!({ "status": "Fulfilled" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["request"]["status"], json!("Fulfilled"));

    let (_, listed) = send(&app, Method::GET, "/api/requests", None).await;
    let listed = &listed.as_array().unwrap()[0];
    assert_eq!(listed["status"], json!("Fulfilled"));
    assert_eq!(listed["patientName"], json!("R. Castellanos"));
}

/// Tests updating a request that does not exist.
///
/// A missing identifier is not an error; the envelope reports success with a
/// null record.
///
/// Expected: 200 OK with `request: null`
#[tokio::test]
async fn reports_null_record_for_missing_request() {
    let (app, _test) = test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/requests/4242",
        Some(json!({ "status": "Cancelled" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["request"], Value::Null);
}

/// Tests deleting a blood request through the API.
///
/// Expected: 200 OK with the acknowledgement envelope
#[tokio::test]
async fn deletes_request() {
    let (app, test) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let request = factory::create_blood_request(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/requests/{}", request.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Blood request deleted" })
    );

    let (_, requests) = send(&app, Method::GET, "/api/requests", None).await;
    assert!(requests.as_array().unwrap().is_empty());
}
