// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sports data proxy routes (TheSportsDB pass-through).
//!
//! List-shaped endpoints never 404 on empty results; the two lookup
//! endpoints do.

use crate::error::Result;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Sports proxy routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sports/players/search/{name}", get(search_players))
        .route("/api/sports/players/{id}", get(get_player))
        .route("/api/sports/teams/search/{name}", get(search_teams))
        .route("/api/sports/teams/{id}", get(get_team))
        .route("/api/sports/teams/{id}/players", get(team_players))
        .route("/api/sports/teams/{id}/events/next", get(next_events))
        .route("/api/sports/teams/{id}/events/last", get(last_events))
        // Same segment name on both: the router requires consistent
        // parameter names at the same position.
        .route("/api/sports/leagues/{league}", get(leagues))
        .route("/api/sports/leagues/{league}/teams", get(league_teams))
        .route("/api/sports/all", get(all_sports))
}

async fn search_players(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.search_players(&name).await?))
}

async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    Ok(Json(state.sports.get_player(&id).await?))
}

async fn search_teams(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.search_teams(&name).await?))
}

async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    Ok(Json(state.sports.get_team(&id).await?))
}

async fn team_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.team_players(&id).await?))
}

async fn next_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.next_events(&id).await?))
}

async fn last_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.last_events(&id).await?))
}

async fn leagues(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.leagues(&sport).await?))
}

async fn league_teams(
    State(state): State<Arc<AppState>>,
    Path(league): Path<String>,
) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.league_teams(&league).await?))
}

async fn all_sports(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>> {
    Ok(Json(state.sports.all_sports().await?))
}
