use std::sync::Arc;
use std::time::Duration;

use aide::openapi::OpenApi;
use axum::{Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;

use crate::routes;
use crate::types::Environment;
use crate::world_id::{Verifier, WorldIdConfig};

/// Upper bound for a whole request, verifier round trip included
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Builds the application router with its OpenAPI document and dependencies
#[must_use]
pub fn app(
    environment: Environment,
    world_id_config: WorldIdConfig,
    verifier: Arc<dyn Verifier>,
) -> Router {
    let mut openapi = OpenApi::default();

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(world_id_config))
        .layer(Extension(verifier))
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    world_id_config: WorldIdConfig,
    verifier: Arc<dyn Verifier>,
) -> anyhow::Result<()> {
    let router = app(environment, world_id_config, verifier)
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
        .layer(tower_http::timeout::TimeoutLayer::new(Duration::from_secs(
            REQUEST_TIMEOUT_SECS,
        )));

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8001), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 World ID Verify started on http://{addr} ({environment})");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
