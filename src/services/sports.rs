// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TheSportsDB API client.
//!
//! Every method forwards a single parameterized GET and unwraps one named
//! field from the JSON envelope. The upstream returns `{"player": null}`
//! rather than an empty array when a search has no results, so a missing or
//! null field unwraps to an empty list.

use crate::error::AppError;
use serde_json::Value;

/// TheSportsDB API client.
#[derive(Clone)]
pub struct SportsDbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SportsDbClient {
    /// Create a new client. The API key is a path segment on every request.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Search players by name.
    pub async fn search_players(&self, name: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("searchplayers.php", &[("p", name)]).await?;
        Ok(unwrap_list(&data, &["player"]))
    }

    /// Get player details by ID. Fails with NotFound if the upstream result
    /// set is empty.
    pub async fn get_player(&self, id: &str) -> Result<Value, AppError> {
        let data = self.fetch("lookupplayer.php", &[("id", id)]).await?;
        unwrap_list(&data, &["players"])
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }

    /// Search teams by name.
    pub async fn search_teams(&self, name: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("searchteams.php", &[("t", name)]).await?;
        Ok(unwrap_list(&data, &["teams"]))
    }

    /// Get team details by ID. Fails with NotFound if the upstream result set
    /// is empty.
    pub async fn get_team(&self, id: &str) -> Result<Value, AppError> {
        let data = self.fetch("lookupteam.php", &[("id", id)]).await?;
        unwrap_list(&data, &["teams"])
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// List all players in a team.
    pub async fn team_players(&self, team_id: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("lookup_all_players.php", &[("id", team_id)]).await?;
        Ok(unwrap_list(&data, &["player"]))
    }

    /// Upcoming events for a team.
    pub async fn next_events(&self, team_id: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("eventsnext.php", &[("id", team_id)]).await?;
        Ok(unwrap_list(&data, &["events"]))
    }

    /// Past events for a team. The upstream uses `results` here, with older
    /// deployments returning `events`.
    pub async fn last_events(&self, team_id: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("eventslast.php", &[("id", team_id)]).await?;
        Ok(unwrap_list(&data, &["results", "events"]))
    }

    /// List leagues for a sport.
    pub async fn leagues(&self, sport: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("all_leagues.php", &[("s", sport)]).await?;
        Ok(unwrap_list(&data, &["leagues"]))
    }

    /// List all teams in a league.
    pub async fn league_teams(&self, league: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("search_all_teams.php", &[("l", league)]).await?;
        Ok(unwrap_list(&data, &["teams"]))
    }

    /// List all sports.
    pub async fn all_sports(&self) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("all_sports.php", &[]).await?;
        Ok(unwrap_list(&data, &["sports"]))
    }

    /// Upcoming events across a league.
    pub async fn upcoming_league_events(&self, league_id: &str) -> Result<Vec<Value>, AppError> {
        let data = self.fetch("eventsnextleague.php", &[("id", league_id)]).await?;
        Ok(unwrap_list(&data, &["events"]))
    }

    /// GET a single endpoint and parse the JSON envelope.
    async fn fetch(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = format!("{}/{}/{}", self.base_url, self.api_key, endpoint);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::SportsApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SportsApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SportsApi(format!("JSON parse error: {}", e)))
    }
}

/// Unwrap the first present array field from the envelope, defaulting to
/// an empty list. A null field counts as absent.
fn unwrap_list(data: &Value, keys: &[&str]) -> Vec<Value> {
    for key in keys {
        if let Some(items) = data.get(*key).and_then(Value::as_array) {
            return items.clone();
        }
    }
    Vec::new()
}
