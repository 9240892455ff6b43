use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};
use world_id_verify::{
    server,
    types::Environment,
    world_id::{DeveloperPortalVerifier, Verifier},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Use JSON format for staging/production (Datadog), regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let world_id_config = environment.world_id_config();
    let verifier: Arc<dyn Verifier> = Arc::new(DeveloperPortalVerifier::new(
        Environment::developer_portal_url(),
    )?);

    tracing::info!(
        app_id = %world_id_config.app_id,
        action = %world_id_config.action,
        "✅ Initialized Developer Portal verifier"
    );

    server::start(environment, world_id_config, verifier).await
}
