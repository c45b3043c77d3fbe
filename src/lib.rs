// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Courtside: backend API for the sports-following app
//!
//! This crate provides user profiles with favorite players/teams,
//! push-notification device registration and dispatch, and a thin
//! proxy over TheSportsDB.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{PushService, SportsDbClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub sports: SportsDbClient,
    pub push: PushService,
}
