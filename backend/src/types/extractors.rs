//! Custom extractors for request parsing

use aide::operation::OperationInput;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::types::error::AppError;

/// JSON body extractor that ignores the `Content-Type` header.
///
/// Clients submitting proofs do not always label their body, so anything that
/// parses as `T` is accepted. Unlike [`axum::Json`], every failure (unreadable
/// body, invalid JSON, wrong shape) is rejected with a 400 [`AppError`].
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!("Failed to read request body: {err}");
            AppError::new(
                StatusCode::BAD_REQUEST,
                "invalid_body",
                "Request body could not be read",
                false,
            )
        })?;

        let payload = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!("Invalid JSON payload: {err}");
            AppError::new(
                StatusCode::BAD_REQUEST,
                "invalid_json",
                "Invalid JSON payload",
                false,
            )
        })?;

        Ok(Self(payload))
    }
}

impl<T> OperationInput for JsonBody<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Documented like Json<T>, the wire format is the same
        Json::<T>::operation_input(ctx, operation);
    }
}
