//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed:
//!
//! - **Searching**: polls every ~80ms so results appear promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize,
//!   a finished background search or a change to the saved players.

mod component;
mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crate::api::{Player, PlayerSource, SearchField, SearchParameters};
use crate::core::action::{Action, Effect, update};
use crate::core::coordinator::{Screen, ScreenId, ScreenKind};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Selected row per list screen, so going back restores the cursor.
    selections: HashMap<ScreenId, usize>,
    /// Focused row of the search form, an index into `SearchField::ALL`.
    pub form_field: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, screen: ScreenId) -> usize {
        self.selections.get(&screen).copied().unwrap_or(0)
    }

    fn move_selection(&mut self, screen: ScreenId, len: usize, down: bool) {
        let current = self.selected(screen).min(len.saturating_sub(1));
        let next = if down {
            (current + 1).min(len.saturating_sub(1))
        } else {
            current.saturating_sub(1)
        };
        self.selections.insert(screen, next);
    }

    /// Forgets selections of screens that are no longer on the stack.
    fn prune(&mut self, stack: &[Screen]) {
        self.selections
            .retain(|id, _| stack.iter().any(|s| s.id == *id));
    }
}

/// Maps an input event to an action for the screen that currently
/// receives input. Purely local changes (cursor moves, form edits) are
/// applied directly and return `None`.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if event == TuiEvent::Quit {
        return Some(Action::Quit);
    }
    let (screen_id, kind) = {
        let screen = app.nav.top()?;
        (screen.id, screen.kind.clone())
    };

    let on_saved = kind == ScreenKind::SavedPlayers;

    match kind {
        ScreenKind::SearchForm(params) => handle_form_event(app, tui, params, event),
        ScreenKind::Alert(_) => {
            matches!(event, TuiEvent::Back | TuiEvent::Submit).then_some(Action::Back)
        }
        ScreenKind::PlayerList | ScreenKind::SavedPlayers => {
            let players: Vec<&Player> = if on_saved {
                ui::saved_players(app)
            } else {
                app.results.iter().collect()
            };
            let len = players.len();
            let selected = players
                .get(tui.selected(screen_id).min(len.saturating_sub(1)))
                .map(|p| (*p).clone());

            match event {
                TuiEvent::Up | TuiEvent::Down => {
                    tui.move_selection(screen_id, len, event == TuiEvent::Down);
                    None
                }
                TuiEvent::Submit => selected.map(Action::OpenPlayer),
                TuiEvent::Save => selected.map(Action::SavePlayer),
                TuiEvent::Compare => selected.map(Action::MarkForComparison),
                TuiEvent::Delete if on_saved => selected.map(|p| Action::DeleteSaved(p.id)),
                TuiEvent::DeleteAll if on_saved => Some(Action::ClearSaved),
                TuiEvent::Refresh => Some(Action::Refresh),
                other => common_action(tui, other),
            }
        }
        ScreenKind::PlayerDetail(player) => match event {
            TuiEvent::Save => Some(Action::SavePlayer(player)),
            TuiEvent::Compare => Some(Action::MarkForComparison(player)),
            other => common_action(tui, other),
        },
        ScreenKind::Comparison(..) => common_action(tui, event),
    }
}

/// Keys that behave the same on every pushed screen.
fn common_action(tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Search => {
            tui.form_field = 0;
            Some(Action::OpenSearch)
        }
        TuiEvent::OpenSaved => Some(Action::OpenSaved),
        _ => None,
    }
}

fn handle_form_event(
    app: &mut App,
    tui: &mut TuiState,
    params: SearchParameters,
    event: TuiEvent,
) -> Option<Action> {
    let last = SearchField::ALL.len() - 1;
    match event {
        TuiEvent::Up => {
            tui.form_field = tui.form_field.saturating_sub(1);
            None
        }
        TuiEvent::Down => {
            tui.form_field = (tui.form_field + 1).min(last);
            None
        }
        TuiEvent::Left | TuiEvent::Right => {
            let field = SearchField::ALL[tui.form_field.min(last)];
            if let Some(Screen {
                kind: ScreenKind::SearchForm(params),
                ..
            }) = app.nav.top_mut()
            {
                params.adjust(field, event == TuiEvent::Right);
            }
            None
        }
        TuiEvent::Submit => Some(Action::SubmitSearch(params)),
        TuiEvent::Back => Some(Action::Back),
        _ => None,
    }
}

/// Applies an action and carries out its effect. Returns true on quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    debug!("Dispatching {:?}", action);
    match update(app, action) {
        Effect::Quit => true,
        Effect::SpawnSearch(params) => {
            spawn_search(app.source.clone(), params, tx.clone());
            false
        }
        Effect::None => false,
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Load results for the remembered search straight away
    let mut should_quit = dispatch(&mut app, Action::Refresh, &tx);
    let mut needs_redraw = true;

    while !should_quit {
        if app.saved_changes.has_changed().unwrap_or(false) {
            let revision = *app.saved_changes.borrow_and_update();
            debug!("Saved players changed (revision {})", revision);
            dispatch(&mut app, Action::SavedChanged, &tx);
            needs_redraw = true;
        }

        if needs_redraw {
            tui.prune(app.nav.stack());
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if event == TuiEvent::Resize {
                continue;
            }
            if let Some(action) = handle_event(&mut app, &mut tui, event)
                && dispatch(&mut app, action, &tx)
            {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (finished searches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

fn spawn_search(source: Arc<dyn PlayerSource>, params: SearchParameters, tx: mpsc::Sender<Action>) {
    info!("Spawning search: {:?}", params);
    tokio::spawn(async move {
        let result = source.search_players(&params).await;
        if tx.send(Action::ResultsLoaded(result)).is_err() {
            warn!("Failed to send search results: receiver dropped");
        }
    });
}
