// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profiles with favorite players/teams)
//! - Devices (push token registrations)
//! - Notification tokens (legacy registrations, read-only)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Device, NotificationToken, User};

/// Firestore database client.
///
/// The inner client is `None` when the store could not be reached at startup;
/// every operation then fails with `StoreUnavailable` until restart.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a disconnected client.
    ///
    /// Used as the startup fallback when the store is unreachable, and as the
    /// offline double in tests. All operations fail with `StoreUnavailable`.
    pub fn disconnected() -> Self {
        Self { client: None }
    }

    /// Whether the store connection is up. Reported by /health.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Helper to get the client or return an error if offline.
    ///
    /// This is the per-request readiness gate: every store operation passes
    /// through here before touching core logic.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client.as_ref().ok_or(AppError::StoreUnavailable)
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by their Google ID (also the document ID).
    pub async fn get_user(&self, google_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(google_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a user. Writes the whole document.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.google_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Device Operations ───────────────────────────────────────

    /// Document ID for a device record.
    ///
    /// Keying on the (URL-encoded) push token is what makes registration an
    /// upsert: re-registering a token overwrites the existing record instead
    /// of creating a duplicate.
    fn device_doc_id(token: &str) -> String {
        urlencoding::encode(token).into_owned()
    }

    /// Get a device by its push token.
    pub async fn get_device(&self, token: &str) -> Result<Option<Device>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::DEVICES)
            .obj()
            .one(Self::device_doc_id(token))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a device registration, keyed by token.
    pub async fn upsert_device(&self, device: &Device) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::DEVICES)
            .document_id(Self::device_doc_id(&device.token))
            .object(device)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get all devices registered to a user.
    pub async fn devices_for_user(&self, user_id: &str) -> Result<Vec<Device>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::DEVICES)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.as_str())]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get every registered device (broadcast recipient set).
    pub async fn list_devices(&self) -> Result<Vec<Device>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::DEVICES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Legacy Token Operations (read-only) ─────────────────────

    /// Get legacy token registrations for a user.
    ///
    /// The legacy collection predates the device records and is never written
    /// by current flows; it is only read so that old registrations still
    /// receive notifications.
    pub async fn legacy_tokens_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationToken>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::NOTIFICATION_TOKENS)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.as_str())]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get every legacy token registration.
    pub async fn list_legacy_tokens(&self) -> Result<Vec<NotificationToken>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::NOTIFICATION_TOKENS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
