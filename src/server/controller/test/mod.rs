mod donor;
mod request;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

/// Builds the API router over a fresh in-memory database with all tables.
///
/// The returned context owns the database connection; keep it alive for the
/// duration of the test.
async fn test_app() -> (Router, TestContext) {
    let test = TestBuilder::new()
        .with_bank_tables()
        .build()
        .await
        .unwrap();

    let app = router().with_state(AppState::new(test.db.clone().unwrap()));

    (app, test)
}

/// Sends one request through the router and returns the status and JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}
