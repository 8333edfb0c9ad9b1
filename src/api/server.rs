use axum::{
    routing::{delete, get, post},
    Router,
};
use mongodb::Collection;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::{
    add_investment_handler, delete_investment_handler, get_investments_handler,
    verify_captcha_handler,
};
use crate::captcha::CaptchaVerifier;
use crate::config::Config;
use crate::db;
use crate::models::InvestmentDocument;

/// Shared handler state: the typed collection handle and the verification
/// client. Constructed once at startup and cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub investments: Collection<InvestmentDocument>,
    pub verifier: CaptchaVerifier,
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

/// Wire the route table onto the given state.
///
/// Kept separate from [`create_app`] so tests can inject their own state
/// (mock verification endpoint, test collection) without touching the
/// environment.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/getInvestments", get(get_investments_handler))
        .route("/addInvestment", post(add_investment_handler))
        .route("/deleteInvestment/{id}", delete(delete_investment_handler))
        .route("/verify-captcha", post(verify_captcha_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state)
        // Any origin may call this API
        .layer(CorsLayer::permissive())
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

/// Build the full application from environment configuration.
pub async fn create_app() -> Result<Router, Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    create_app_with(&config).await
}

pub async fn create_app_with(config: &Config) -> Result<Router, Box<dyn std::error::Error>> {
    let database = db::connect(&config.mongo_uri).await?;

    let state = AppState {
        investments: database.collection::<InvestmentDocument>(db::COLLECTION),
        verifier: CaptchaVerifier::new(config.recaptcha_secret.clone()),
    };

    Ok(build_router(state))
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting investment API server");

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let config = Config::from_env()?;
    let app = create_app_with(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
