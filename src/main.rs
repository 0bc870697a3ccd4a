//! RIASEC quiz server entry point.

use std::process::ExitCode;
use std::sync::Arc;

use axum::Router;
use http::{header::CONTENT_TYPE, HeaderValue, Method};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use riasec_quiz::adapters::{
    quiz_router, GeminiConfig, GeminiProvider, InMemoryFormSubmissionStore, LlmQuestionGenerator,
    QuizAppState,
};
use riasec_quiz::application::new_shared_session;
use riasec_quiz::config::{AiConfig, AppConfig, ConfigError, ServerConfig, ValidationError};
use riasec_quiz::ports::{AIError, AIProvider};

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("failed to create AI provider: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("error"))
                .init();
            tracing::error!(error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    let addr = config.server.socket_addr()?;
    let ai_provider = build_ai_provider(&config.ai)?;
    let info = ai_provider.provider_info();

    let generator = LlmQuestionGenerator::new(ai_provider).with_temperature(config.ai.temperature);
    let state = QuizAppState::for_session(
        new_shared_session(),
        Arc::new(generator),
        Arc::new(InMemoryFormSubmissionStore::new()),
    );

    let app = build_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        provider = %info.name,
        model = %info.model,
        environment = ?config.server.environment,
        "RIASEC quiz listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_ai_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let api_key = ai.gemini_api_key.clone().unwrap_or_default();
    let mut provider_config = GeminiConfig::new(api_key).with_timeout(ai.timeout());
    if let Some(model) = &ai.model {
        provider_config = provider_config.with_model(model);
    }
    if let Some(url) = &ai.base_url {
        provider_config = provider_config.with_base_url(url);
    }
    Ok(Arc::new(GeminiProvider::new(provider_config)?))
}

fn build_router(state: QuizAppState, server: &ServerConfig) -> Router {
    let app = quiz_router(state).layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return app;
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, stopping server");
}
