//! Slidesmith server entry point

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slidesmith::adapters::ai::build_provider;
use slidesmith::adapters::http::{app_router, SynthesisAppState};
use slidesmith::adapters::validation::JsonSchemaValidator;
use slidesmith::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config);

    config.validate().context("invalid configuration")?;

    let provider = build_provider(&config.ai).context("failed to build AI provider")?;
    let info = provider.provider_info();
    tracing::info!(
        provider = %info.name,
        model = %info.model,
        environment = ?config.server.environment,
        "AI provider ready"
    );

    let state = SynthesisAppState::new(
        provider,
        Arc::new(JsonSchemaValidator::new()),
        config.generation_settings(),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "Slidesmith listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
