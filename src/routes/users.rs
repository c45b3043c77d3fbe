// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and favorites routes.

use crate::error::{AppError, Result};
use crate::models::{FavoritePlayer, FavoriteTeam, User};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// User routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(sync_profile))
        .route("/api/users/{google_id}", get(get_profile))
        .route("/api/users/{google_id}/players", put(add_favorite_player))
        .route("/api/users/{google_id}/teams", put(add_favorite_team))
        .route(
            "/api/users/{google_id}/players/{player_id}",
            delete(remove_favorite_player),
        )
        .route(
            "/api/users/{google_id}/teams/{team_id}",
            delete(remove_favorite_team),
        )
}

/// Fetch a user or fail with NotFound.
async fn fetch_user(state: &AppState, google_id: &str) -> Result<User> {
    state
        .db
        .get_user(google_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", google_id)))
}

// ─── Profile Sync ────────────────────────────────────────────

/// Profile sync payload, sent by the client after Google sign-in.
///
/// Required strings default to empty so that an absent field and an empty
/// field both fail validation with the same 400.
#[derive(Deserialize, Validate)]
struct SyncProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    google_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    email: String,
    picture: Option<String>,
}

/// Create or update a user profile, keyed on the Google ID.
///
/// Returns 201 on first sync, 200 on subsequent syncs. Updates overwrite
/// name/email/picture and last_login only; favorites are untouched.
async fn sync_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SyncProfileRequest>,
) -> Result<(StatusCode, Json<User>)> {
    payload.validate()?;
    let now = now_rfc3339();

    match state.db.get_user(&payload.google_id).await? {
        Some(mut user) => {
            user.apply_profile(payload.name, payload.email, payload.picture, &now);
            state.db.upsert_user(&user).await?;
            Ok((StatusCode::OK, Json(user)))
        }
        None => {
            let user = User::new(
                payload.google_id,
                payload.name,
                payload.email,
                payload.picture,
                &now,
            );
            state.db.upsert_user(&user).await?;
            tracing::info!(google_id = %user.google_id, "User created");
            Ok((StatusCode::CREATED, Json(user)))
        }
    }
}

/// Get a user profile by Google ID. No side effects.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(google_id): Path<String>,
) -> Result<Json<User>> {
    let user = fetch_user(&state, &google_id).await?;
    Ok(Json(user))
}

// ─── Favorites ───────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct AddPlayerRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    player_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    player_name: String,
    team_id: Option<String>,
    team_name: Option<String>,
}

/// Add a player to a user's favorites. Duplicate player_id is a conflict.
async fn add_favorite_player(
    State(state): State<Arc<AppState>>,
    Path(google_id): Path<String>,
    Json(payload): Json<AddPlayerRequest>,
) -> Result<Json<User>> {
    payload.validate()?;

    let mut user = fetch_user(&state, &google_id).await?;
    user.add_favorite_player(FavoritePlayer {
        player_id: payload.player_id,
        player_name: payload.player_name,
        team_id: payload.team_id,
        team_name: payload.team_name,
    })?;

    state.db.upsert_user(&user).await?;
    Ok(Json(user))
}

#[derive(Deserialize, Validate)]
struct AddTeamRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    team_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    team_name: String,
}

/// Add a team to a user's favorites. Duplicate team_id is a conflict.
async fn add_favorite_team(
    State(state): State<Arc<AppState>>,
    Path(google_id): Path<String>,
    Json(payload): Json<AddTeamRequest>,
) -> Result<Json<User>> {
    payload.validate()?;

    let mut user = fetch_user(&state, &google_id).await?;
    user.add_favorite_team(FavoriteTeam {
        team_id: payload.team_id,
        team_name: payload.team_name,
    })?;

    state.db.upsert_user(&user).await?;
    Ok(Json(user))
}

/// Remove a player from favorites. Removing an absent ID is a no-op;
/// 404 only when the user itself is missing.
async fn remove_favorite_player(
    State(state): State<Arc<AppState>>,
    Path((google_id, player_id)): Path<(String, String)>,
) -> Result<Json<User>> {
    let mut user = fetch_user(&state, &google_id).await?;
    user.remove_favorite_player(&player_id);

    state.db.upsert_user(&user).await?;
    Ok(Json(user))
}

/// Remove a team from favorites. Idempotent like player removal.
async fn remove_favorite_team(
    State(state): State<Arc<AppState>>,
    Path((google_id, team_id)): Path<(String, String)>,
) -> Result<Json<User>> {
    let mut user = fetch_user(&state, &google_id).await?;
    user.remove_favorite_team(&team_id);

    state.db.upsert_user(&user).await?;
    Ok(Json(user))
}
