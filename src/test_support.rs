//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{NetworkError, Player, PlayerSource, SearchParameters};
use crate::core::state::App;
use crate::store::{PlayerStore, PreferenceStore};

/// A source that answers every search with the same canned result.
pub struct StubSource {
    pub response: Result<Vec<Player>, NetworkError>,
}

#[async_trait]
impl PlayerSource for StubSource {
    async fn search_players(&self, _params: &SearchParameters) -> Result<Vec<Player>, NetworkError> {
        self.response.clone()
    }
}

pub fn sample_player(id: &str, name: &str, age: u16, ca: u16, pa: u16) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        age: Some(age),
        current_ability: Some(ca),
        potential_ability: Some(pa),
        positions: vec!["MC".to_string()],
        club: Some("Test FC".to_string()),
        nationality: Some("England".to_string()),
    }
}

/// Creates a test App with an empty stub source and stores in a scratch
/// directory. Keep the returned `TempDir` alive for the test's duration.
pub fn test_app() -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let players = PlayerStore::open(dir.path().join("players.json"));
    let preferences =
        PreferenceStore::open(dir.path().join("preferences.toml")).expect("open preferences");
    let source = Arc::new(StubSource {
        response: Ok(Vec::new()),
    });
    let app = App::new(source, players, preferences);
    (dir, app)
}

/// Concatenates every cell of a test backend's buffer.
pub fn buffer_text(backend: &ratatui::backend::TestBackend) -> String {
    backend
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
