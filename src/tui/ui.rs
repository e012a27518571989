use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::api::Player;
use crate::core::coordinator::{Screen, ScreenKind};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, Comparison, PlayerCard, PlayerTable, SearchForm, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let title = app
        .nav
        .top()
        .map(|s| s.kind.title())
        .unwrap_or_default();
    TitleBar::new(title, app.status_message.clone(), app.is_loading).render(frame, title_area);

    if let Some(screen) = app.nav.top_pushed() {
        draw_screen(frame, main_area, app, tui, screen);
    }

    if let Some(modal) = app.nav.modal() {
        match &modal.kind {
            ScreenKind::SearchForm(params) => SearchForm {
                params,
                focused: tui.form_field,
            }
            .render(frame, main_area),
            ScreenKind::Alert(message) => Alert { message }.render(frame, main_area),
            // Anything else presented modally draws full-screen
            _ => draw_screen(frame, main_area, app, tui, modal),
        }
    }

    let help = Span::styled(
        help_text(app.nav.top().map(|s| &s.kind)),
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(help, help_area);
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, screen: &Screen) {
    let marked = app.compare_pick.as_ref().map(|p| p.id.as_str());
    match &screen.kind {
        ScreenKind::PlayerList => PlayerTable {
            title: format!("Players ({})", app.search.sort.label()),
            players: app.results.iter().collect(),
            selected: tui.selected(screen.id),
            marked,
            empty_message: if app.is_loading {
                "Searching..."
            } else {
                "No players. Press / to change the search."
            },
        }
        .render(frame, area),
        ScreenKind::SavedPlayers => PlayerTable {
            title: "Saved players".to_string(),
            players: saved_players(app),
            selected: tui.selected(screen.id),
            marked,
            empty_message: "No saved players. Press s on a player to save them.",
        }
        .render(frame, area),
        ScreenKind::PlayerDetail(player) => PlayerCard {
            player,
            is_saved: app.is_saved(&player.id),
        }
        .render(frame, area),
        ScreenKind::Comparison(left, right) => Comparison { left, right }.render(frame, area),
        ScreenKind::SearchForm(params) => SearchForm {
            params,
            focused: tui.form_field,
        }
        .render(frame, area),
        ScreenKind::Alert(message) => Alert { message }.render(frame, area),
    }
}

pub(crate) fn saved_players(app: &App) -> Vec<&Player> {
    app.saved.iter().map(|s| &s.player).collect()
}

fn help_text(kind: Option<&ScreenKind>) -> &'static str {
    match kind {
        Some(ScreenKind::PlayerList) => {
            " ↑↓ Select  Enter Open  / Search  r Refresh  s Save  c Compare  v Saved  q Quit"
        }
        Some(ScreenKind::SavedPlayers) => {
            " ↑↓ Select  Enter Open  c Compare  d Delete  D Delete all  Esc Back  q Quit"
        }
        Some(ScreenKind::PlayerDetail(_)) => " s Save  c Compare  Esc Back  q Quit",
        Some(ScreenKind::Comparison(..)) => " Esc Back  q Quit",
        Some(ScreenKind::SearchForm(_)) => " ↑↓ Field  ←→ Change  Enter Search  Esc Cancel",
        Some(ScreenKind::Alert(_)) => " Enter OK",
        None => " q Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, sample_player, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend())
    }

    #[test]
    fn test_draws_results_list() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::Refresh);
        update(
            &mut app,
            Action::ResultsLoaded(Ok(vec![sample_player("1", "Ada", 20, 120, 160)])),
        );

        let text = render(&app, &TuiState::new());
        assert!(text.contains("Scout › Players"));
        assert!(text.contains("Ada"));
        assert!(text.contains("/ Search"));
    }

    #[test]
    fn test_draws_search_form_over_list() {
        let (_dir, mut app) = test_app();
        update(&mut app, Action::OpenSearch);

        let text = render(&app, &TuiState::new());
        assert!(text.contains("Scout › Search"));
        assert!(text.contains("Min age"));
        assert!(text.contains("Enter Search"));
    }

    #[test]
    fn test_draws_player_detail() {
        let (_dir, mut app) = test_app();
        update(
            &mut app,
            Action::OpenPlayer(sample_player("7", "Cleo", 19, 100, 170)),
        );

        let text = render(&app, &TuiState::new());
        assert!(text.contains("Scout › Cleo"));
        assert!(text.contains("Potential ability"));
        assert!(text.contains("s to save"));
    }
}
