use sonic_core::RelayConfig;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = RelayConfig::from_env()?;

    // Initialize the application (telemetry, state, routes)
    let (_state, router) = sonic_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    sonic_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
