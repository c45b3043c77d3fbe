//! User model for storage and API.
//!
//! Favorites are embedded value lists, not documents of their own. Membership
//! is keyed on the player/team identifier and checked linearly; the expected
//! scale is tens of favorites per user.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A player in a user's favorites list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritePlayer {
    pub player_id: String,
    pub player_name: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
}

/// A team in a user's favorites list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteTeam {
    pub team_id: String,
    pub team_name: String,
}

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Google account ID (also used as document ID)
    pub google_id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Profile picture URL
    pub picture: Option<String>,
    /// Favorite players, in insertion order
    #[serde(default)]
    pub favorite_players: Vec<FavoritePlayer>,
    /// Favorite teams, in insertion order
    #[serde(default)]
    pub favorite_teams: Vec<FavoriteTeam>,
    /// Last profile sync timestamp
    pub last_login: String,
    /// When the user first synced
    pub created_at: String,
}

impl User {
    /// Create a new user with empty favorites.
    pub fn new(
        google_id: String,
        name: String,
        email: String,
        picture: Option<String>,
        now: &str,
    ) -> Self {
        Self {
            google_id,
            name,
            email,
            picture,
            favorite_players: Vec::new(),
            favorite_teams: Vec::new(),
            last_login: now.to_string(),
            created_at: now.to_string(),
        }
    }

    /// Overwrite profile fields from a sync. Favorites and created_at are
    /// untouched.
    pub fn apply_profile(
        &mut self,
        name: String,
        email: String,
        picture: Option<String>,
        now: &str,
    ) {
        self.name = name;
        self.email = email;
        self.picture = picture;
        self.last_login = now.to_string();
    }

    /// Add a player to favorites.
    ///
    /// Fails with `Conflict` if the player_id is already in the list, leaving
    /// the list unchanged.
    pub fn add_favorite_player(&mut self, player: FavoritePlayer) -> Result<(), AppError> {
        if self
            .favorite_players
            .iter()
            .any(|p| p.player_id == player.player_id)
        {
            return Err(AppError::Conflict("Player already in favorites".to_string()));
        }
        self.favorite_players.push(player);
        Ok(())
    }

    /// Add a team to favorites.
    ///
    /// Fails with `Conflict` if the team_id is already in the list.
    pub fn add_favorite_team(&mut self, team: FavoriteTeam) -> Result<(), AppError> {
        if self.favorite_teams.iter().any(|t| t.team_id == team.team_id) {
            return Err(AppError::Conflict("Team already in favorites".to_string()));
        }
        self.favorite_teams.push(team);
        Ok(())
    }

    /// Remove all favorite players matching the given ID.
    ///
    /// Removing an absent ID is a no-op, not an error.
    pub fn remove_favorite_player(&mut self, player_id: &str) {
        self.favorite_players.retain(|p| p.player_id != player_id);
    }

    /// Remove all favorite teams matching the given ID. Idempotent.
    pub fn remove_favorite_team(&mut self, team_id: &str) {
        self.favorite_teams.retain(|t| t.team_id != team_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "g123".to_string(),
            "Test User".to_string(),
            "test@example.com".to_string(),
            None,
            "2024-01-15T10:00:00Z",
        )
    }

    fn player(id: &str, name: &str) -> FavoritePlayer {
        FavoritePlayer {
            player_id: id.to_string(),
            player_name: name.to_string(),
            team_id: None,
            team_name: None,
        }
    }

    #[test]
    fn test_new_user_has_empty_favorites() {
        let user = test_user();
        assert!(user.favorite_players.is_empty());
        assert!(user.favorite_teams.is_empty());
        assert_eq!(user.created_at, user.last_login);
    }

    #[test]
    fn test_apply_profile_preserves_favorites() {
        let mut user = test_user();
        user.add_favorite_team(FavoriteTeam {
            team_id: "t1".to_string(),
            team_name: "Lakers".to_string(),
        })
        .unwrap();

        user.apply_profile(
            "New Name".to_string(),
            "new@example.com".to_string(),
            Some("https://example.com/pic.jpg".to_string()),
            "2024-02-01T00:00:00Z",
        );

        assert_eq!(user.name, "New Name");
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.last_login, "2024-02-01T00:00:00Z");
        assert_eq!(user.created_at, "2024-01-15T10:00:00Z"); // unchanged
        assert_eq!(user.favorite_teams.len(), 1); // untouched
    }

    #[test]
    fn test_duplicate_player_is_conflict() {
        let mut user = test_user();

        user.add_favorite_player(player("p1", "LeBron James")).unwrap();
        let err = user
            .add_favorite_player(player("p1", "LeBron James"))
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(user.favorite_players.len(), 1);
    }

    #[test]
    fn test_duplicate_team_is_conflict() {
        let mut user = test_user();
        let lakers = FavoriteTeam {
            team_id: "t1".to_string(),
            team_name: "Lakers".to_string(),
        };

        user.add_favorite_team(lakers.clone()).unwrap();
        let err = user.add_favorite_team(lakers).unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(user.favorite_teams.len(), 1);
        assert_eq!(user.favorite_teams[0].team_id, "t1");
        assert_eq!(user.favorite_teams[0].team_name, "Lakers");
    }

    #[test]
    fn test_favorites_keep_insertion_order() {
        let mut user = test_user();

        user.add_favorite_player(player("p1", "First")).unwrap();
        user.add_favorite_player(player("p2", "Second")).unwrap();
        user.add_favorite_player(player("p3", "Third")).unwrap();

        let ids: Vec<&str> = user
            .favorite_players
            .iter()
            .map(|p| p.player_id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_remove_absent_player_is_noop() {
        let mut user = test_user();
        user.add_favorite_player(player("p1", "LeBron James")).unwrap();

        user.remove_favorite_player("p_missing");

        assert_eq!(user.favorite_players.len(), 1);
    }

    #[test]
    fn test_remove_player() {
        let mut user = test_user();
        user.add_favorite_player(player("p1", "LeBron James")).unwrap();
        user.add_favorite_player(player("p2", "Stephen Curry")).unwrap();

        user.remove_favorite_player("p1");

        assert_eq!(user.favorite_players.len(), 1);
        assert_eq!(user.favorite_players[0].player_id, "p2");
    }

    #[test]
    fn test_remove_team_idempotent() {
        let mut user = test_user();
        user.add_favorite_team(FavoriteTeam {
            team_id: "t1".to_string(),
            team_name: "Lakers".to_string(),
        })
        .unwrap();

        user.remove_favorite_team("t1");
        user.remove_favorite_team("t1"); // second removal is a no-op

        assert!(user.favorite_teams.is_empty());
    }

    #[test]
    fn test_readd_after_remove() {
        let mut user = test_user();

        user.add_favorite_player(player("p1", "LeBron James")).unwrap();
        user.remove_favorite_player("p1");
        user.add_favorite_player(player("p1", "LeBron James")).unwrap();

        assert_eq!(user.favorite_players.len(), 1);
    }
}
