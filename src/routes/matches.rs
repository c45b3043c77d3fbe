// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Upcoming-match routes.
//!
//! `/api/matches/upcoming` queries the configured default league;
//! the team variant reuses the per-team next-events lookup.

use crate::error::Result;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Match routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/matches/upcoming", get(upcoming))
        .route("/api/matches/upcoming/{team}", get(upcoming_for_team))
}

async fn upcoming(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>> {
    let league_id = &state.config.upcoming_league_id;
    Ok(Json(state.sports.upcoming_league_events(league_id).await?))
}

async fn upcoming_for_team(
    State(state): State<Arc<AppState>>,
    Path(team): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.next_events(&team).await?))
}
