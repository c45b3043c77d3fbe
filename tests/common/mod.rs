// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use courtside_api::config::Config;
use courtside_api::db::FirestoreDb;
use courtside_api::routes::create_router;
use courtside_api::services::{PushService, SportsDbClient};
use courtside_api::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a disconnected database handle (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::disconnected()
}

/// Create a test app with an offline store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = test_db_offline();

    let sports = SportsDbClient::new(
        config.sports_api_base_url.clone(),
        config.sports_api_key.clone(),
    );
    let push = PushService::new(config.push_gateway_url.clone(), db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        sports,
        push,
    });

    (create_router(state.clone()), state)
}
