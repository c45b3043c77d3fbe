//! Device registration model for push notifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Device platform tag. Closed set; anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            other => Err(AppError::BadRequest(format!(
                "Invalid platform '{}': must be ios, android, or web",
                other
            ))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        };
        f.write_str(s)
    }
}

/// A registered push device, stored in Firestore keyed by token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Owning user's Google ID
    pub user_id: String,
    /// Expo push token (globally unique, also the document key)
    pub token: String,
    pub platform: Platform,
    pub created_at: String,
    pub updated_at: String,
}

impl Device {
    /// Create a fresh registration.
    pub fn new(user_id: String, token: String, platform: Platform, now: &str) -> Self {
        Self {
            user_id,
            token,
            platform,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Refresh an existing registration in place.
    ///
    /// The token may change hands: a re-registered token takes its new owner.
    /// `created_at` is preserved.
    pub fn refresh(&mut self, user_id: String, platform: Platform, now: &str) {
        self.user_id = user_id;
        self.platform = platform;
        self.updated_at = now.to_string();
    }
}

/// Legacy token registration: user + token only, no platform or timestamps.
///
/// Superseded by [`Device`]. Current flows never write this shape; the
/// dispatcher still reads it so that old registrations keep receiving pushes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationToken {
    pub user_id: String,
    pub token: String,
}
