use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use docsight::infrastructure::observability::{TracingConfig, init_tracing};
use docsight::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let tracing_config = TracingConfig::from_settings(&settings.logging, environment.as_str());
    init_tracing(&tracing_config, settings.server.port)
        .context("failed to initialize tracing")?;

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);

    let state = AppState::from_settings(settings).context("failed to build application state")?;
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
