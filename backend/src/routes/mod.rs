mod docs;
/// Liveness endpoint
pub mod health;
/// Proof verification endpoint
pub mod verify;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
///
/// Dependencies (`Environment`, `WorldIdConfig`, `Arc<dyn Verifier>`, `OpenApi`) are
/// expected as `Extension` layers, see [`crate::server::app`].
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/api/world-id-verify", post(verify::handler))
}
