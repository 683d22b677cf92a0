mod common;

use axum_test::TestServer;
use clinica::app::create_router;
use common::create_test_app_state;

#[tokio::test]
async fn home_returns_liveness_payload() {
    let app = create_router(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "API Sistema Médico");
    assert_eq!(body["status"], "funcionando");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = create_router(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/no-such-route").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = create_router(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/api/login"].is_object());
    assert!(doc["paths"]["/api/citas"].is_object());
}
