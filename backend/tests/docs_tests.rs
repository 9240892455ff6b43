mod common;

use common::{MockVerifier, TestSetup};
use http::StatusCode;
use http_body_util::BodyExt;
use world_id_verify::{types::Environment, world_id::VerificationResult};

fn setup(environment: Environment) -> TestSetup {
    TestSetup::with_environment(
        MockVerifier::returning(VerificationResult::accepted()),
        environment,
    )
}

#[tokio::test]
async fn test_openapi_schema_hidden_in_production() {
    let context = setup(Environment::Production);

    let response = context
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_openapi_schema_served_outside_production() {
    for environment in [Environment::Development, Environment::Staging] {
        let context = setup(environment);

        let response = context
            .send_get_request("/openapi.json")
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::OK, "{environment}");

        let body = common::parse_response_body(response).await;
        assert!(body["openapi"].is_string(), "{environment}");
        assert!(
            body["paths"]["/api/world-id-verify"]["post"].is_object(),
            "{environment}"
        );
    }
}

#[tokio::test]
async fn test_docs_ui_served() {
    let context = setup(Environment::Production);

    let response = context
        .send_get_request("/docs")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("/openapi.json"));
}
