// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod device;
pub mod user;

pub use device::{Device, NotificationToken, Platform};
pub use user::{FavoritePlayer, FavoriteTeam, User};
