use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use super::error::VerifierError;

/// Default timeout for verification requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Builds the HTTP client used for verification requests.
///
/// Requests are bounded by `timeout` and traced through `reqwest-tracing`, so
/// the outbound call shows up as a child span of the incoming request.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialized
pub fn build_http_client(timeout: Duration) -> Result<ClientWithMiddleware, VerifierError> {
    let reqwest_client = Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("world-id-verify/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(VerifierError::ClientBuild)?;

    Ok(ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build())
}
