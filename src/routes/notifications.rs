// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device registration and push notification routes.

use crate::error::Result;
use crate::models::{Device, Platform};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

/// Notification routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications/register", post(register_device))
        .route("/api/notifications/send", post(send_to_user))
        .route("/api/notifications/broadcast", post(broadcast))
}

// ─── Device Registration ─────────────────────────────────────

#[derive(Deserialize, Validate)]
struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    token: String,
    #[serde(default, rename = "userId")]
    #[validate(length(min = 1))]
    user_id: String,
    /// Parsed into [`Platform`] after presence validation, so an unknown
    /// value gets its own error message.
    #[serde(default)]
    #[validate(length(min = 1))]
    platform: String,
}

#[derive(Serialize)]
struct RegisterResponse {
    success: bool,
    device: Device,
}

/// Register or refresh a push device, upserting on the token.
///
/// Idempotent: repeated identical calls converge to the same stored record.
/// A token re-registered by another user takes the new owner.
async fn register_device(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    payload.validate()?;
    let platform: Platform = payload.platform.parse()?;
    let now = now_rfc3339();

    let device = match state.db.get_device(&payload.token).await? {
        Some(mut existing) => {
            existing.refresh(payload.user_id, platform, &now);
            existing
        }
        None => Device::new(payload.user_id, payload.token, platform, &now),
    };

    state.db.upsert_device(&device).await?;
    tracing::info!(user_id = %device.user_id, platform = %device.platform, "Device registered");

    Ok(Json(RegisterResponse {
        success: true,
        device,
    }))
}

// ─── Sending ─────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SendRequest {
    #[serde(default, rename = "userId")]
    #[validate(length(min = 1))]
    user_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    body: String,
    data: Option<Value>,
}

#[derive(Serialize)]
struct SendResponse {
    success: bool,
    result: Value,
}

/// Send a notification to all of one user's devices.
async fn send_to_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendRequest>,
) -> Result<Json<SendResponse>> {
    payload.validate()?;

    let result = state
        .push
        .send_to_user(&payload.user_id, &payload.title, &payload.body, payload.data)
        .await?;

    Ok(Json(SendResponse {
        success: true,
        result,
    }))
}

#[derive(Deserialize, Validate)]
struct BroadcastRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    body: String,
    data: Option<Value>,
}

#[derive(Serialize)]
struct BroadcastResponse {
    success: bool,
    results: Vec<Value>,
}

/// Broadcast a notification to every registered device, in ordered batches.
async fn broadcast(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BroadcastRequest>,
) -> Result<Json<BroadcastResponse>> {
    payload.validate()?;

    let results = state
        .push
        .broadcast(&payload.title, &payload.body, payload.data)
        .await?;

    Ok(Json(BroadcastResponse {
        success: true,
        results,
    }))
}
