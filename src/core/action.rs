//! # Actions
//!
//! Everything that can happen in Scout becomes an `Action`.
//! User opens a player? That's `Action::OpenPlayer(player)`.
//! A search finishes? That's `Action::ResultsLoaded(result)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the caller to carry out. No network I/O happens here; the
//! TUI spawns requests when asked to.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::api::{NetworkError, Player, SearchParameters};
use crate::core::coordinator::{CoordinatorId, Route, ScreenKind};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-run the current search.
    Refresh,
    OpenSearch,
    SubmitSearch(SearchParameters),
    ResultsLoaded(Result<Vec<Player>, NetworkError>),
    OpenPlayer(Player),
    /// First call marks a player, second call opens the comparison.
    MarkForComparison(Player),
    OpenSaved,
    SavePlayer(Player),
    DeleteSaved(String),
    ClearSaved,
    /// The player store changed on disk.
    SavedChanged,
    /// Close the visible screen (modal first).
    Back,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnSearch(SearchParameters),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => start_search(app),
        Action::OpenSearch => {
            if app.nav.modal().is_some() {
                return Effect::None;
            }
            let route = Route::Search(app.search.clone());
            navigate(app, route);
            Effect::None
        }
        Action::SubmitSearch(params) => {
            close_visible(app);
            app.search = params;
            if let Err(e) = app.preferences.set_last_search(&app.search) {
                warn!("Failed to remember search: {}", e);
            }
            start_search(app)
        }
        Action::ResultsLoaded(result) => {
            app.is_loading = false;
            match result {
                Ok(players) => {
                    app.status_message = format!("{} players", players.len());
                    app.results = players;
                }
                Err(e) => {
                    warn!("Search failed: {}", e);
                    app.status_message = "Search failed".to_string();
                    show_alert(app, e.to_string());
                }
            }
            Effect::None
        }
        Action::OpenPlayer(player) => {
            navigate(app, Route::PlayerDetail(player));
            Effect::None
        }
        Action::MarkForComparison(player) => {
            match app.compare_pick.take() {
                Some(first) if first.id != player.id => {
                    app.status_message = format!("Comparing {} and {}", first.name, player.name);
                    navigate(app, Route::Comparison(first, player));
                }
                Some(first) => {
                    app.status_message = format!("Unmarked {}", first.name);
                }
                None => {
                    app.status_message =
                        format!("Marked {}; pick another player to compare", player.name);
                    app.compare_pick = Some(player);
                }
            }
            Effect::None
        }
        Action::OpenSaved => {
            navigate(app, Route::SavedPlayers);
            Effect::None
        }
        Action::SavePlayer(player) => {
            match app.players.save_player(&player) {
                Ok(()) => app.status_message = format!("Saved {}", player.name),
                Err(e) => show_alert(app, e.to_string()),
            }
            Effect::None
        }
        Action::DeleteSaved(id) => {
            match app.players.delete_player(&id) {
                Ok(true) => app.status_message = "Removed saved player".to_string(),
                Ok(false) => {}
                Err(e) => show_alert(app, e.to_string()),
            }
            Effect::None
        }
        Action::ClearSaved => {
            match app.players.delete_all_player_info() {
                Ok(()) => app.status_message = "Cleared saved players".to_string(),
                Err(e) => show_alert(app, e.to_string()),
            }
            Effect::None
        }
        Action::SavedChanged => {
            match app.players.fetch_all_players() {
                Ok(saved) => app.saved = saved,
                Err(e) => warn!("Failed to reload saved players: {}", e),
            }
            Effect::None
        }
        Action::Back => {
            close_visible(app);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn start_search(app: &mut App) -> Effect {
    if app.is_loading {
        return Effect::None;
    }
    app.is_loading = true;
    app.status_message = "Searching...".to_string();
    Effect::SpawnSearch(app.search.clone())
}

/// The coordinator that owns the visible screen, falling back to the root.
fn visible_owner(app: &App) -> CoordinatorId {
    app.nav
        .top()
        .map(|s| s.owner)
        .filter(|owner| app.tree.contains(*owner))
        .unwrap_or_else(|| app.tree.root())
}

fn navigate(app: &mut App, route: Route) {
    let from = visible_owner(app);
    app.tree.navigate(from, route, &mut app.nav);
}

/// Dismisses the modal if one is up, otherwise pops the top screen.
fn close_visible(app: &mut App) {
    if app.nav.modal().is_some() {
        app.tree.dismiss_modal(&mut app.nav, true);
    } else {
        app.tree.pop_view_controller(&mut app.nav);
    }
}

fn show_alert(app: &mut App, message: String) {
    if app.nav.modal().is_some() {
        app.tree.dismiss_modal(&mut app.nav, false);
    }
    let owner = visible_owner(app);
    app.tree
        .present_modal(owner, &mut app.nav, ScreenKind::Alert(message), true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SortOption;
    use crate::core::coordinator::{FlowKind, Phase};
    use crate::test_support::{sample_player, test_app};

    #[test]
    fn test_refresh_spawns_search_once() {
        let (_dir, mut app) = test_app();
        assert!(matches!(update(&mut app, Action::Refresh), Effect::SpawnSearch(_)));
        assert!(app.is_loading);
        // A second refresh while loading does nothing
        assert_eq!(update(&mut app, Action::Refresh), Effect::None);
    }

    #[test]
    fn test_open_search_presents_form_modal() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::OpenSearch);

        let modal = app.nav.modal().unwrap();
        assert!(matches!(modal.kind, ScreenKind::SearchForm(_)));
        assert_eq!(app.tree.kind(modal.owner), Some(FlowKind::Search));
        assert_eq!(app.tree.children(app.tree.root()), &[modal.owner]);
    }

    #[test]
    fn test_submit_search_closes_form_and_remembers_filters() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::OpenSearch);
        let search_flow = app.nav.modal().unwrap().owner;

        let params = SearchParameters {
            age_range: 18..=21,
            sort: SortOption::AgeAscending,
            ..Default::default()
        };
        let effect = update(&mut app, Action::SubmitSearch(params.clone()));

        assert_eq!(effect, Effect::SpawnSearch(params.clone()));
        assert!(app.nav.modal().is_none());
        assert!(!app.tree.contains(search_flow));
        assert!(app.tree.children(app.tree.root()).is_empty());
        assert_eq!(app.preferences.last_search(), Some(params));
    }

    #[test]
    fn test_results_loaded_replaces_results() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::Refresh);
        let players = vec![
            sample_player("1", "Ada", 20, 120, 160),
            sample_player("2", "Ben", 22, 110, 140),
        ];
        update(&mut app, Action::ResultsLoaded(Ok(players)));
        assert!(!app.is_loading);
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.status_message, "2 players");
    }

    #[test]
    fn test_failed_search_shows_alert() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::ResultsLoaded(Err(NetworkError::InvalidResponse { status: 429 })),
        );

        let modal = app.nav.modal().unwrap();
        assert!(matches!(&modal.kind, ScreenKind::Alert(msg) if msg.contains("429")));

        // Dismissing the alert keeps the root flow running
        update(&mut app, Action::Back);
        assert!(app.nav.modal().is_none());
        assert_eq!(app.tree.phase(app.tree.root()), Some(Phase::Started));
    }

    #[test]
    fn test_open_player_then_back() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::OpenPlayer(sample_player("1", "Ada", 20, 120, 160)));
        assert_eq!(app.nav.depth(), 2);
        let detail = app.nav.top().unwrap().owner;
        assert_eq!(app.tree.kind(detail), Some(FlowKind::PlayerDetail));

        update(&mut app, Action::Back);
        assert_eq!(app.nav.depth(), 1);
        assert!(!app.tree.contains(detail));
    }

    #[test]
    fn test_back_on_root_screen_is_noop() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::Back);
        assert_eq!(app.nav.depth(), 1);
        assert_eq!(app.tree.phase(app.tree.root()), Some(Phase::Started));
    }

    #[test]
    fn test_comparison_from_detail_is_child_of_detail() {
        let (_dir, mut app) = test_app();
        let ada = sample_player("1", "Ada", 20, 120, 160);
        let ben = sample_player("2", "Ben", 22, 110, 140);

        update(&mut app, Action::MarkForComparison(ada.clone()));
        assert_eq!(app.compare_pick.as_ref(), Some(&ada));

        update(&mut app, Action::OpenPlayer(ben.clone()));
        let detail = app.nav.top().unwrap().owner;
        update(&mut app, Action::MarkForComparison(ben.clone()));

        let top = app.nav.top().unwrap();
        assert_eq!(top.kind, ScreenKind::Comparison(ada, ben));
        assert_eq!(app.tree.parent(top.owner), Some(detail));
        assert!(app.compare_pick.is_none());

        // Backing out of both releases the whole branch
        update(&mut app, Action::Back);
        update(&mut app, Action::Back);
        assert_eq!(app.tree.len(), 1);
    }

    #[test]
    fn test_marking_same_player_twice_unmarks() {
        let (_dir, mut app) = test_app();
        let ada = sample_player("1", "Ada", 20, 120, 160);
        update(&mut app, Action::MarkForComparison(ada.clone()));
        update(&mut app, Action::MarkForComparison(ada));
        assert!(app.compare_pick.is_none());
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_save_and_refresh_saved_list() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::SavePlayer(sample_player("1", "Ada", 20, 120, 160)));
        assert!(app.saved_changes.has_changed().unwrap());

        update(&mut app, Action::SavedChanged);
        assert!(app.is_saved("1"));

        update(&mut app, Action::DeleteSaved("1".to_string()));
        update(&mut app, Action::SavedChanged);
        assert!(!app.is_saved("1"));
    }

    #[test]
    fn test_clear_saved() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::SavePlayer(sample_player("1", "Ada", 20, 120, 160)));
        update(&mut app, Action::SavePlayer(sample_player("2", "Ben", 22, 110, 140)));
        update(&mut app, Action::ClearSaved);
        update(&mut app, Action::SavedChanged);
        assert!(app.saved.is_empty());
    }

    #[test]
    fn test_player_from_saved_list_nests_under_saved_flow() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::OpenSaved);
        let saved_flow = app.nav.top().unwrap().owner;
        assert_eq!(app.tree.kind(saved_flow), Some(FlowKind::SavedPlayers));

        update(&mut app, Action::OpenPlayer(sample_player("1", "Ada", 20, 120, 160)));
        let detail = app.nav.top().unwrap().owner;
        assert_eq!(app.tree.parent(detail), Some(saved_flow));
    }

    #[test]
    fn test_quit() {
        let (_dir, mut app) = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
