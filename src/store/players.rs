//! Saved players, keyed by player id.
//!
//! Every mutation bumps a revision on a `watch` channel. Screens that show
//! saved players hold a receiver and reload when it changes, whoever made
//! the change.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::{StoreError, atomic_write};
use crate::api::Player;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub saved_at: i64,
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct PlayerFile {
    players: Vec<SavedPlayer>,
}

pub struct PlayerStore {
    path: PathBuf,
    revision: watch::Sender<u64>,
}

impl PlayerStore {
    /// Opens the store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Player store at {}", path.display());
        let (revision, _) = watch::channel(0);
        Self { path, revision }
    }

    /// A receiver that sees a new revision after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// All saved players, most recently saved first.
    pub fn fetch_all_players(&self) -> Result<Vec<SavedPlayer>, StoreError> {
        let mut players = self.load()?.players;
        players.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(players)
    }

    pub fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.players.iter().any(|p| p.player.id == id))
    }

    /// Inserts or replaces the player with the same id.
    pub fn save_player(&self, player: &Player) -> Result<(), StoreError> {
        let mut file = self.load()?;
        file.players.retain(|p| p.player.id != player.id);
        file.players.push(SavedPlayer {
            player: player.clone(),
            saved_at: Utc::now().timestamp(),
        });
        self.write(&file)?;
        info!("Saved player {} ({})", player.name, player.id);
        Ok(())
    }

    /// Removes one player. Returns whether anything was removed.
    pub fn delete_player(&self, id: &str) -> Result<bool, StoreError> {
        let mut file = self.load()?;
        let before = file.players.len();
        file.players.retain(|p| p.player.id != id);
        if file.players.len() == before {
            return Ok(false);
        }
        self.write(&file)?;
        info!("Deleted saved player {}", id);
        Ok(true)
    }

    pub fn delete_all_player_info(&self) -> Result<(), StoreError> {
        self.write(&PlayerFile::default())?;
        info!("Deleted all saved players");
        Ok(())
    }

    fn load(&self) -> Result<PlayerFile, StoreError> {
        if !self.path.exists() {
            return Ok(PlayerFile::default());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| StoreError::Parse(e.to_string()))
    }

    fn write(&self, file: &PlayerFile) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(file).map_err(|e| StoreError::Serialize(e.to_string()))?;
        atomic_write(&self.path, &json)?;
        self.revision.send_modify(|rev| *rev += 1);
        Ok(())
    }
}
