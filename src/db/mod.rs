//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const DEVICES: &str = "devices";
    /// Legacy token registrations, read-only (superseded by DEVICES)
    pub const NOTIFICATION_TOKENS: &str = "notification_tokens";
}
