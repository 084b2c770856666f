//! Axum-based gateway for the LUBBI site. Config-driven via CoreConfig.
//!
//! Owns the sensor store and the chat resolver and injects both into handlers through
//! [`AppState`]. Optionally serves the static site for unmatched routes.

mod error;
mod extract;
mod handlers;

use axum::http::Method;
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use lubbi_core::{CoreConfig, Resolver, SensorStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads, chat rules compile, site is present, port is free.
fn run_verify() -> Result<(), String> {
    print!("Checking config... ");
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("OK ({})", config.app_name);

    print!("Compiling chat rules... ");
    let resolver = Resolver::new().map_err(|e| format!("Chat rules invalid: {}", e))?;
    println!(
        "OK ({} patterns, {} keywords)",
        resolver.rule_names().len(),
        resolver.keywords().len()
    );

    if config.site_enabled {
        let index = config.site_root().join("index.html");
        print!("Checking site at {}... ", config.site_dir);
        if !index.exists() {
            return Err(format!("{} not found", index.display()));
        }
        println!("OK");
    }

    let addr = config.bind_addr();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    println!("\n✅ SUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[lubbi-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let resolver = Arc::new(Resolver::new()?);
    tracing::debug!(
        target: "lubbi::gateway",
        rules = ?resolver.rule_names(),
        "Chat rules compiled"
    );

    let app = build_app(AppState {
        config: Arc::clone(&config),
        sensors: Arc::new(SensorStore::new()),
        resolver,
    });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(target: "lubbi::gateway", "{} listening on {}", config.app_name, addr);
    if config.site_enabled {
        tracing::info!(target: "lubbi::gateway", "Serving site from {}", config.site_dir);
    }
    tracing::info!(target: "lubbi::gateway", "Waiting for LUBBI readings on POST /api/sensores");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    let site = state.config.site_enabled.then(|| state.config.site_root());

    // The robot and the page are served from different origins on the LAN.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/sensores",
            get(handlers::sensors::current_reading).post(handlers::sensors::receive_reading),
        )
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/analyze-vitals", post(handlers::vitals::analyze_vitals))
        .with_state(state);

    if let Some(site_dir) = site {
        // `/` -> index.html, everything else unmatched -> file under site_dir (404 if absent)
        app = app.fallback_service(ServeDir::new(site_dir).append_index_html_on_directories(true));
    }

    app.layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) sensors: Arc<SensorStore>,
    pub(crate) resolver: Arc<Resolver>,
}

/// GET /api/health – liveness check for the site and scripts.
async fn health(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "app_name": state.config.app_name,
    }))
}
