use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use reqwest_middleware::ClientWithMiddleware;
use semaphore_rs::hash_to_field;
use serde_json::{Map, Value};

use super::{
    error::VerifierError,
    request::{build_http_client, DEFAULT_REQUEST_TIMEOUT_SECS},
    types::{AppId, ProofPayload, VerificationResult},
};

/// Default host of the World Developer Portal API
pub const DEFAULT_DEVELOPER_PORTAL_URL: &str = "https://developer.worldcoin.org";

/// Capability that checks a World ID proof for an app and action.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Verifies `proof` for the given app and action.
    ///
    /// A rejected proof is `Ok` with `success == false`.
    ///
    /// # Errors
    /// Returns an error if no verification result could be obtained
    async fn verify(
        &self,
        proof: &ProofPayload,
        app_id: &AppId,
        action: &str,
    ) -> Result<VerificationResult, VerifierError>;
}

/// Verifies proofs through the Developer Portal `v2/verify` API.
///
/// Any 2xx answer means the proof is valid. Other answers carry a JSON error
/// object (`code`, `detail`, `attribute`) which becomes the rejected result.
pub struct DeveloperPortalVerifier {
    base_url: String,
    http_client: ClientWithMiddleware,
}

impl DeveloperPortalVerifier {
    /// Creates a verifier talking to the Developer Portal at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new(base_url: impl Into<String>) -> Result<Self, VerifierError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Same as [`Self::new`] with a custom per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, VerifierError> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: build_http_client(timeout)?,
        })
    }

    fn verification_endpoint(&self, app_id: &AppId) -> String {
        format!("{}/api/v2/verify/{app_id}", self.base_url)
    }
}

#[async_trait]
impl Verifier for DeveloperPortalVerifier {
    async fn verify(
        &self,
        proof: &ProofPayload,
        app_id: &AppId,
        action: &str,
    ) -> Result<VerificationResult, VerifierError> {
        let endpoint = self.verification_endpoint(app_id);
        let body = Value::Object(verification_request_body(proof, action)).to_string();

        tracing::debug!(%app_id, action, "Sending verification request to the Developer Portal");

        let response = self
            .http_client
            .post(&endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(VerificationResult::accepted());
        }

        let error_body = response.bytes().await?;
        parse_rejection(&error_body, status)
    }
}

/// Hash of the signal bound into the proof, as a 0x-prefixed 32 byte hex string.
///
/// Proofs relayed by this service carry no signal, so the hash of empty bytes is sent.
fn signal_hash(signal: &[u8]) -> String {
    format!("{:#066x}", hash_to_field(signal))
}

/// The proof fields with `action` and `signal_hash` merged in.
///
/// Client supplied `action`/`signal_hash` keys are overwritten.
fn verification_request_body(proof: &ProofPayload, action: &str) -> Map<String, Value> {
    let mut body = proof.fields().clone();
    body.insert("action".to_string(), Value::String(action.to_string()));
    body.insert("signal_hash".to_string(), Value::String(signal_hash(b"")));
    body
}

/// Turns a non-2xx response into a rejected result carrying the service's error fields.
fn parse_rejection(
    body: &[u8],
    status: reqwest::StatusCode,
) -> Result<VerificationResult, VerifierError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(details)) => Ok(VerificationResult::rejected(details)),
        _ => Err(VerifierError::InvalidResponse(format!(
            "Status {status}: {}",
            String::from_utf8_lossy(body)
        ))),
    }
}
