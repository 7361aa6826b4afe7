//! Backend for the platemap dish-voting board.
//!
//! Users drag dishes onto a two-dimensional price/taste plane; the
//! client posts the resulting normalized placements here in one
//! batch. This service owns the dish catalog, the append-only vote
//! log, and the two read-side aggregates the results view renders
//! (per-dish mean position and the raw density points feeding the
//! client's contour plot).
//!
//! # Routes
//! - `GET /items` — seed and list the catalog
//! - `POST /votes` — persist one session's placements atomically
//! - `GET /averages` — per-dish mean position and vote count
//! - `GET /density` — votes grouped by exact coordinate
//!
//! Handlers are stateless; the pooled SQLite handle inside
//! [`state::AppState`] is the only shared resource. Reads only need
//! read-committed freshness, so aggregates a few seconds stale are
//! fine.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::sync::Arc;

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use config::Config;
use routes::{averages_handler, density_handler, items_handler, votes_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/items", get(items_handler))
        .route("/votes", post(votes_handler))
        .route("/averages", get(averages_handler))
        .route("/density", get(density_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::init(Config::load()).expect("Failed to open database");

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let router = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
