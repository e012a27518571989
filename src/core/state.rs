//! # Application State
//!
//! Core business state for Scout. No TUI types here; per-screen
//! presentation state (selected rows, focused field) lives in `tui`.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PlayerSource>   // API client (or a test stub)
//! ├── players: PlayerStore            // saved players on disk
//! ├── saved_changes: watch::Receiver  // bumps when the store changes
//! ├── preferences: PreferenceStore    // last search, etc.
//! ├── tree: CoordinatorTree           // navigation flows
//! ├── nav: NavigationContext          // screen stack + modal
//! ├── results: Vec<Player>            // last search results
//! ├── saved: Vec<SavedPlayer>         // cached copy of the store
//! ├── search: SearchParameters        // filters of the last search
//! ├── compare_pick: Option<Player>    // first player marked for comparison
//! ├── is_loading: bool                // search in flight
//! └── status_message: String          // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::warn;
use tokio::sync::watch;

use crate::api::{Player, PlayerSource, SearchParameters};
use crate::core::coordinator::{CoordinatorTree, MainCoordinator, NavigationContext};
use crate::store::{PlayerStore, PreferenceStore, SavedPlayer};

pub struct App {
    pub source: Arc<dyn PlayerSource>,
    pub players: PlayerStore,
    pub saved_changes: watch::Receiver<u64>,
    pub preferences: PreferenceStore,
    pub tree: CoordinatorTree,
    pub nav: NavigationContext,
    pub results: Vec<Player>,
    pub saved: Vec<SavedPlayer>,
    pub search: SearchParameters,
    pub compare_pick: Option<Player>,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    /// Builds the app and starts the root flow.
    pub fn new(
        source: Arc<dyn PlayerSource>,
        players: PlayerStore,
        preferences: PreferenceStore,
    ) -> Self {
        let saved = players.fetch_all_players().unwrap_or_else(|e| {
            warn!("Failed to load saved players: {}", e);
            Vec::new()
        });
        let saved_changes = players.subscribe();
        let search = preferences.last_search().unwrap_or_default();

        let mut tree = CoordinatorTree::new(Box::new(MainCoordinator::new()));
        let mut nav = NavigationContext::new();
        let root = tree.root();
        tree.start(root, &mut nav);

        Self {
            source,
            players,
            saved_changes,
            preferences,
            tree,
            nav,
            results: Vec::new(),
            saved,
            search,
            compare_pick: None,
            is_loading: false,
            status_message: String::from("Welcome to Scout!"),
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|s| s.player.id == id)
    }
}
