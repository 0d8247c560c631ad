//! Creative Compliance Server
//!
//! Checks ad creatives composed in the browser editor against the
//! retailer's self-serve banner policies. Provides REST API endpoints for:
//!
//! - Compliance checking of a canvas snapshot (+ optional screenshot)
//! - Listing the fixed rule universe
//! - Listing supported canvas formats and their safe zones
//!
//! ## Architecture
//!
//! The editor posts a flattened canvas snapshot; the server validates it,
//! hands it to the compliance-engine, and returns the report. Screenshots
//! are forwarded to an external OCR service when one is configured.
//!
//! - Rate limiting via tower-governor
//! - OCR is best-effort: outages degrade to object-text-only checks

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use compliance_engine::{
    ComplianceEngine, DisabledRecognizer, EngineConfig, HttpOcrClient, TextRecognizer,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_check_compliance, handle_health, handle_list_formats, handle_list_rules};

/// Command-line arguments for the creative compliance server
#[derive(Parser, Debug)]
#[command(name = "creative-server")]
#[command(about = "Creative compliance server for retailer banner policies")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// OCR service endpoint (e.g. http://localhost:8884/api/ocr); OCR is disabled when unset
    #[arg(long, env = "OCR_URL")]
    ocr_url: Option<String>,

    /// OCR timeout in milliseconds
    #[arg(long, default_value = "12000")]
    ocr_timeout_ms: u64,

    /// OCR language tag
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Maximum request body size in megabytes (screenshots arrive inline)
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT / (1024 * 1024))]
    body_limit_mb: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ComplianceEngine>,
}

/// Default request body limit; a full-size Story PNG as a data URL exceeds axum's 2 MB
pub const DEFAULT_BODY_LIMIT: usize = 20 * 1024 * 1024;

/// API routes without transport middleware
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/rules", get(handle_list_rules))
        .route("/api/formats", get(handle_list_formats))
        .route("/api/check-compliance", post(handle_check_compliance))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Burst allowance for the per-IP limiter
pub fn burst_size(rate_limit: u32) -> u32 {
    rate_limit.saturating_mul(2)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting creative compliance server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(burst_size(args.rate_limit))
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    // OCR recognizer
    let recognizer: Arc<dyn TextRecognizer> = match &args.ocr_url {
        Some(url) => {
            info!("OCR endpoint: {}", url);
            Arc::new(HttpOcrClient::new(url.clone()))
        }
        None => {
            warn!("No OCR endpoint configured; checks will use object text only");
            Arc::new(DisabledRecognizer)
        }
    };

    let config = EngineConfig {
        ocr_timeout: Duration::from_millis(args.ocr_timeout_ms),
        ocr_language: args.ocr_lang.clone(),
    };

    // Create shared state
    let state = AppState {
        engine: Arc::new(ComplianceEngine::with_recognizer(recognizer, config)),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router and apply middleware
    let body_limit = args.body_limit_mb.saturating_mul(1024 * 1024);
    let app = app_router(state, body_limit)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("OCR timeout: {}ms", args.ocr_timeout_ms);
    info!("Body limit: {}MB", args.body_limit_mb);

    // Peer addresses are needed by the per-IP rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
