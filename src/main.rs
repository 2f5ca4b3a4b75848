use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scribe_gateway::application::services::{TranscriptionProxy, TranscriptionService};
use scribe_gateway::infrastructure::audio::{TranscriptionEngineFactory, TranscriptionProvider};
use scribe_gateway::infrastructure::observability::{TracingConfig, init_tracing};
use scribe_gateway::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::new(
        environment.as_str(),
        settings.logging.enable_json,
        &settings.logging.level,
    );
    init_tracing(&tracing_config, settings.server.port);

    let scaffold = ScaffoldConfig::default();
    let provider = if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: using mock transcription engine");
        TranscriptionProvider::Mock
    } else {
        settings.transcription.provider
    };

    let options = settings
        .transcription
        .options()
        .context("Invalid transcription settings")?;
    if options.api_key.is_none() && provider != TranscriptionProvider::Mock {
        tracing::warn!("No server-held transcription API key configured");
    }

    let engine = TranscriptionEngineFactory::create(
        provider,
        &settings.transcription.engine_config(scaffold.mock_delay()),
    )
    .context("Failed to create transcription engine")?;

    tracing::info!(
        provider = ?provider,
        model = %options.model,
        language = ?options.language_hint.map(|l| l.as_str()),
        max_in_flight = settings.server.max_in_flight,
        allow_client_api_key = settings.transcription.allow_client_api_key,
        "Transcription engine ready"
    );

    let proxy = TranscriptionProxy::new(engine, settings.server.max_in_flight);
    let state = AppState {
        transcription_service: Arc::new(TranscriptionService::new(proxy)),
        transcription_options: options,
        allow_client_api_key: settings.transcription.allow_client_api_key,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
