use thiserror::Error;

/// Errors raised while calling the verification service.
///
/// A proof rejected by the service is not an error: it is reported through
/// [`super::VerificationResult::success`]. These variants cover the cases where no
/// result could be obtained at all.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The outbound HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Network error when communicating with the verification service
    #[error("Network error: {0}")]
    Network(#[from] reqwest_middleware::Error),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    ResponseBody(#[from] reqwest::Error),

    /// Unexpected response format or status from the verification service
    #[error("Unexpected verification service response: {0}")]
    InvalidResponse(String),
}
