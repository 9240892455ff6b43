use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;
use world_id_verify::{
    server,
    types::Environment,
    world_id::{AppId, ProofPayload, VerificationResult, Verifier, VerifierError, WorldIdConfig},
};

pub const TEST_APP_ID: &str = "app_staging_509648994ab005fe79c4ddd0449606ca";
pub const TEST_ACTION: &str = "verify-human";

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// A single call received by [`MockVerifier`]
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyCall {
    pub proof: ProofPayload,
    pub app_id: AppId,
    pub action: String,
}

/// Verifier that answers every call the same way and records what it was asked
pub struct MockVerifier {
    /// `None` simulates a verifier that could not be reached
    response: Option<VerificationResult>,
    calls: Mutex<Vec<VerifyCall>>,
}

impl MockVerifier {
    pub fn returning(result: VerificationResult) -> Self {
        Self {
            response: Some(result),
            calls: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<VerifyCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Verifier for MockVerifier {
    async fn verify(
        &self,
        proof: &ProofPayload,
        app_id: &AppId,
        action: &str,
    ) -> Result<VerificationResult, VerifierError> {
        self.calls.lock().unwrap().push(VerifyCall {
            proof: proof.clone(),
            app_id: app_id.clone(),
            action: action.to_string(),
        });

        self.response.clone().ok_or_else(|| {
            VerifierError::InvalidResponse("Status 503 Service Unavailable: maintenance".into())
        })
    }
}

/// Router wired with a [`MockVerifier`]
pub struct TestSetup {
    pub router: Router,
    pub verifier: Arc<MockVerifier>,
    pub world_id_config: WorldIdConfig,
}

impl TestSetup {
    /// Development router, the environment the other tests run in
    pub fn new(verifier: MockVerifier) -> Self {
        Self::with_environment(verifier, Environment::Development)
    }

    /// Router built exactly like the server builds it, for the given environment
    pub fn with_environment(verifier: MockVerifier, environment: Environment) -> Self {
        setup_test_env();

        let world_id_config = WorldIdConfig {
            app_id: AppId::new(TEST_APP_ID),
            action: TEST_ACTION.to_string(),
        };
        let verifier = Arc::new(verifier);
        let dyn_verifier: Arc<dyn Verifier> = verifier.clone();

        let router = server::app(environment, world_id_config.clone(), dyn_verifier);

        Self {
            router,
            verifier,
            world_id_config,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    /// Sends `body` as-is, without a `Content-Type` header
    pub async fn send_raw_post_request(
        &self,
        route: &str,
        body: impl Into<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .body(body.into())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}
