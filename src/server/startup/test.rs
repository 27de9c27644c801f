use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::static_site;
use crate::server::config::Config;

/// Tests the single-page-application fallback.
///
/// Verifies that the root path and an arbitrary unmatched path both serve the
/// same entry document from the static directory.
///
/// Expected: 200 with the index.html body for both paths
#[tokio::test]
async fn falls_back_to_index_for_unmatched_paths() {
    let dir = std::env::temp_dir().join(format!("bloodbank-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>bloodbank</html>").unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        static_dir: dir.to_string_lossy().into_owned(),
    };
    let app = Router::new().fallback_service(static_site(&config));

    for uri in ["/", "/donors/deep/client/route"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>bloodbank</html>");
    }
}
