//! Red String server binary.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use red_string::adapters::ai::build_provider;
use red_string::adapters::http::{build_router, cors_layer, GarmentHandlers};
use red_string::adapters::tools::ScoringToolExecutor;
use red_string::application::agent::{AgentConfig, GarmentDialogueAgent};
use red_string::application::handlers::{AnalyzeCompatibilityHandler, GenerateDialogueHandler};
use red_string::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use red_string::ports::AIError;

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("failed to build language model provider: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "Startup failed");
        eprintln!("red-string: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let provider = build_provider(&config.ai)?;
    let info = provider.provider_info();
    tracing::info!(
        provider = %info.name,
        model = %info.model,
        max_steps = config.ai.max_steps,
        "Language model provider ready"
    );

    let agent_config = AgentConfig::new(config.ai.max_steps)
        .with_max_tokens(config.ai.max_tokens)
        .with_temperature(config.ai.temperature);
    let agent = Arc::new(GarmentDialogueAgent::new(
        provider,
        Arc::new(ScoringToolExecutor::new()),
        agent_config,
    ));

    let handlers = GarmentHandlers::new(
        Arc::new(GenerateDialogueHandler::new(agent.clone())),
        Arc::new(AnalyzeCompatibilityHandler::new(agent)),
        config.ai.provider.as_str(),
    );
    let app = build_router(handlers, cors_layer(&config.server.cors_origins_list()));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Listening on http://{} ({:?})",
        addr,
        config.server.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
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
    tracing::info!("Shutdown signal received");
}
