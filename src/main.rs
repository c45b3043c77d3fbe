// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courtside API Server
//!
//! Backend for the sports-following app: user profiles with favorite
//! players/teams, push-notification dispatch, and a proxy over TheSportsDB.

use courtside_api::{
    config::Config,
    db::FirestoreDb,
    services::{PushService, SportsDbClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, environment = %config.environment, "Starting Courtside API");

    // Initialize Firestore. A connection failure is survivable: the server
    // stays up and store-backed routes answer 503 until restart.
    let db = match FirestoreDb::new(&config.gcp_project_id).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to Firestore, continuing disconnected");
            FirestoreDb::disconnected()
        }
    };

    // Initialize the sports API client
    let sports = SportsDbClient::new(
        config.sports_api_base_url.clone(),
        config.sports_api_key.clone(),
    );
    tracing::info!(base_url = %config.sports_api_base_url, "Sports API client initialized");

    // Initialize the push dispatcher
    let push = PushService::new(config.push_gateway_url.clone(), db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        sports,
        push,
    });

    // Build router
    let app = courtside_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("courtside_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
