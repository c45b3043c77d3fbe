// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Push notification dispatcher.
//!
//! Resolves a recipient set (canonical devices plus legacy tokens), builds
//! one message per recipient, and forwards them to the Expo push gateway.
//! Broadcasts are partitioned into batches of [`PUSH_BATCH_SIZE`] and sent
//! sequentially; a failure on batch *k* aborts the remaining batches and
//! surfaces how many batches the gateway accepted first.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Device, NotificationToken};
use serde::Serialize;
use serde_json::Value;

/// Expo caps a single push call at 100 messages.
pub const PUSH_BATCH_SIZE: usize = 100;

/// A single push message in the gateway's wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub data: Value,
    pub sound: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

/// Push gateway client plus the device lookups feeding it.
#[derive(Clone)]
pub struct PushService {
    http: reqwest::Client,
    gateway_url: String,
    db: FirestoreDb,
}

impl PushService {
    pub fn new(gateway_url: String, db: FirestoreDb) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_url,
            db,
        }
    }

    /// Send a notification to every device registered to one user.
    ///
    /// The whole recipient set goes to the gateway in a single call; a
    /// gateway failure aborts the send with zero batches completed.
    pub async fn send_to_user(
        &self,
        user_id: &str,
        title: &str,
        body: &str,
        data: Option<Value>,
    ) -> Result<Value, AppError> {
        let devices = self.db.devices_for_user(user_id).await?;
        let legacy = self.db.legacy_tokens_for_user(user_id).await?;

        let messages = direct_plan(&devices, &legacy, user_id, title, body, data)?;

        tracing::info!(user_id, recipients = messages.len(), "Sending notification");

        self.post_batch(&messages)
            .await
            .map_err(|message| AppError::Dispatch {
                message,
                batches_sent: 0,
            })
    }

    /// Send a notification to every registered device.
    ///
    /// Batches are sent in order, one at a time; the gateway responses are
    /// collected in the same order. A failure on batch *k* aborts batches
    /// k+1.. and reports `batches_sent = k`.
    pub async fn broadcast(
        &self,
        title: &str,
        body: &str,
        data: Option<Value>,
    ) -> Result<Vec<Value>, AppError> {
        let devices = self.db.list_devices().await?;
        let legacy = self.db.list_legacy_tokens().await?;

        let batches = broadcast_plan(&devices, &legacy, title, body, data)?;

        tracing::info!(batches = batches.len(), "Broadcasting notification");

        let mut results = Vec::with_capacity(batches.len());
        for batch in &batches {
            match self.post_batch(batch).await {
                Ok(result) => results.push(result),
                Err(message) => {
                    return Err(AppError::Dispatch {
                        message,
                        batches_sent: results.len(),
                    })
                }
            }
        }

        Ok(results)
    }

    /// POST one batch to the gateway, returning its raw JSON result.
    async fn post_batch(&self, messages: &[PushMessage]) -> Result<Value, String> {
        let response = self
            .http
            .post(&self.gateway_url)
            .json(messages)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {}: {}", status, body));
        }

        response
            .json()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    }
}

/// Merge canonical devices with legacy token rows into one recipient list.
///
/// Device tokens come first in store order; legacy tokens follow, skipping
/// any token already registered as a device.
fn collect_tokens(devices: &[Device], legacy: &[NotificationToken]) -> Vec<String> {
    let mut tokens: Vec<String> = devices.iter().map(|d| d.token.clone()).collect();
    for entry in legacy {
        if !tokens.iter().any(|t| t == &entry.token) {
            tokens.push(entry.token.clone());
        }
    }
    tokens
}

/// Build the single-call message list for a targeted send.
///
/// Fails with NotFound before any gateway traffic when the user has no
/// registered devices.
fn direct_plan(
    devices: &[Device],
    legacy: &[NotificationToken],
    user_id: &str,
    title: &str,
    body: &str,
    data: Option<Value>,
) -> Result<Vec<PushMessage>, AppError> {
    let tokens = collect_tokens(devices, legacy);
    if tokens.is_empty() {
        return Err(AppError::NotFound(format!(
            "No devices registered for user {}",
            user_id
        )));
    }

    let data = data.unwrap_or_else(|| Value::Object(Default::default()));
    Ok(tokens
        .into_iter()
        .map(|to| PushMessage {
            to,
            title: title.to_string(),
            body: body.to_string(),
            data: data.clone(),
            sound: "default".to_string(),
            badge: Some(1),
        })
        .collect())
}

/// Partition the full recipient set into ordered gateway batches.
///
/// Broadcast messages omit the badge. Fails with NotFound before any gateway
/// traffic when no devices are registered at all.
fn broadcast_plan(
    devices: &[Device],
    legacy: &[NotificationToken],
    title: &str,
    body: &str,
    data: Option<Value>,
) -> Result<Vec<Vec<PushMessage>>, AppError> {
    let tokens = collect_tokens(devices, legacy);
    if tokens.is_empty() {
        return Err(AppError::NotFound("No devices registered".to_string()));
    }

    let data = data.unwrap_or_else(|| Value::Object(Default::default()));
    Ok(tokens
        .chunks(PUSH_BATCH_SIZE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|token| PushMessage {
                    to: token.clone(),
                    title: title.to_string(),
                    body: body.to_string(),
                    data: data.clone(),
                    sound: "default".to_string(),
                    badge: None,
                })
                .collect()
        })
        .collect())
}
