// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod push;
pub mod sports;

pub use push::PushService;
pub use sports::SportsDbClient;
