use std::sync::Arc;

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    types::{AppError, JsonBody},
    world_id::{ProofPayload, VerificationResult, Verifier, WorldIdConfig},
};

/// The verifier's result, rendered with a status matching its outcome.
pub struct VerificationOutcome(pub VerificationResult);

impl VerificationOutcome {
    /// `200 OK` for accepted proofs, `400 Bad Request` for rejected ones
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        if self.0.success {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for VerificationOutcome {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0)).into_response()
    }
}

impl OperationOutput for VerificationOutcome {
    type Inner = VerificationResult;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<VerificationResult>::operation_response(ctx, operation)
    }
}

/// Verifies a World ID proof.
///
/// The body is forwarded untouched to the verifier together with the configured
/// app id and action. The verifier's result is returned as-is: `200` when the
/// proof is valid, `400` with the verifier's error fields otherwise.
///
/// # Errors
///
/// - `AppError` (400) - The body is not a JSON object
/// - `AppError` (500) - The verifier could not be reached or answered unexpectedly
pub async fn handler(
    Extension(config): Extension<WorldIdConfig>,
    Extension(verifier): Extension<Arc<dyn Verifier>>,
    JsonBody(proof): JsonBody<ProofPayload>,
) -> Result<VerificationOutcome, AppError> {
    let result = verifier
        .verify(&proof, &config.app_id, &config.action)
        .await?;

    if result.success {
        tracing::debug!("World ID proof verified");
    } else {
        tracing::info!(
            code = result.code().unwrap_or("unknown"),
            "World ID proof rejected"
        );
    }

    Ok(VerificationOutcome(result))
}
