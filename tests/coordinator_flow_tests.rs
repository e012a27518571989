use scout::api::{Player, SearchParameters};
use scout::core::coordinator::{
    CoordinatorTree, FlowKind, MainCoordinator, NavigationContext, Phase, Route, ScreenKind,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn player(id: &str, name: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        age: Some(20),
        current_ability: Some(120),
        potential_ability: Some(160),
        positions: vec!["MC".to_string()],
        club: None,
        nationality: None,
    }
}

/// A started root flow showing the player list.
fn started_tree() -> (CoordinatorTree, NavigationContext) {
    let mut tree = CoordinatorTree::new(Box::new(MainCoordinator::new()));
    let mut nav = NavigationContext::new();
    let root = tree.root();
    tree.start(root, &mut nav);
    (tree, nav)
}

// ============================================================================
// Flow Lifecycle
// ============================================================================

#[test]
fn test_root_starts_on_player_list() {
    let (tree, nav) = started_tree();
    let root = tree.root();

    assert_eq!(tree.phase(root), Some(Phase::Started));
    assert_eq!(tree.kind(root), Some(FlowKind::Main));
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.top().unwrap().kind, ScreenKind::PlayerList);
    assert_eq!(tree.screen_ref(root), Some(nav.top().unwrap().id));
}

#[test]
fn test_detail_flow_finishes_when_popped() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let detail = tree
        .navigate(root, Route::PlayerDetail(player("1", "Ada")), &mut nav)
        .unwrap();
    assert_eq!(tree.kind(detail), Some(FlowKind::PlayerDetail));
    assert_eq!(tree.parent(detail), Some(root));
    assert_eq!(tree.children(root), &[detail]);
    assert_eq!(nav.depth(), 2);

    let popped = tree.pop_view_controller(&mut nav).unwrap();
    assert_eq!(popped.owner, detail);
    assert!(!tree.contains(detail));
    assert!(tree.children(root).is_empty());
    assert_eq!(nav.depth(), 1);
}

#[test]
fn test_root_screen_cannot_be_popped() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    assert!(tree.pop_view_controller(&mut nav).is_none());
    assert_eq!(tree.phase(root), Some(Phase::Started));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_search_flow_lives_while_form_is_presented() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let search = tree
        .navigate(root, Route::Search(SearchParameters::default()), &mut nav)
        .unwrap();
    let modal = nav.modal().unwrap();
    assert_eq!(modal.owner, search);
    assert!(matches!(modal.kind, ScreenKind::SearchForm(_)));
    // Presenting does not push
    assert_eq!(nav.depth(), 1);

    tree.dismiss_modal(&mut nav, true);
    assert!(nav.modal().is_none());
    assert!(!tree.contains(search));
}

// ============================================================================
// Route Bubbling
// ============================================================================

#[test]
fn test_comparison_is_a_child_of_detail() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let detail = tree
        .navigate(root, Route::PlayerDetail(player("1", "Ada")), &mut nav)
        .unwrap();
    let comparison = tree
        .navigate(
            detail,
            Route::Comparison(player("1", "Ada"), player("2", "Ben")),
            &mut nav,
        )
        .unwrap();

    assert_eq!(tree.parent(comparison), Some(detail));
    assert_eq!(tree.children(detail), &[comparison]);
    assert_eq!(nav.depth(), 3);
}

#[test]
fn test_unhandled_route_bubbles_to_root() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let detail = tree
        .navigate(root, Route::PlayerDetail(player("1", "Ada")), &mut nav)
        .unwrap();
    // Detail does not open the saved list itself
    let saved = tree.navigate(detail, Route::SavedPlayers, &mut nav).unwrap();

    assert_eq!(tree.kind(saved), Some(FlowKind::SavedPlayers));
    assert_eq!(tree.parent(saved), Some(root));
    assert_eq!(tree.children(root), &[detail, saved]);
}

#[test]
fn test_saved_list_opens_its_own_detail() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let saved = tree.navigate(root, Route::SavedPlayers, &mut nav).unwrap();
    let detail = tree
        .navigate(saved, Route::PlayerDetail(player("3", "Cleo")), &mut nav)
        .unwrap();
    assert_eq!(tree.parent(detail), Some(saved));

    // Popping back past the saved list releases both flows
    tree.pop_view_controller(&mut nav);
    assert!(!tree.contains(detail));
    assert!(tree.contains(saved));
    tree.pop_view_controller(&mut nav);
    assert!(!tree.contains(saved));
    assert_eq!(tree.len(), 1);
}

// ============================================================================
// Modals
// ============================================================================

#[test]
fn test_alert_does_not_finish_its_presenter() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    let detail = tree
        .navigate(root, Route::PlayerDetail(player("1", "Ada")), &mut nav)
        .unwrap();
    tree.present_modal(detail, &mut nav, ScreenKind::Alert("oops".to_string()), true)
        .unwrap();

    let dismissed = tree.dismiss_modal(&mut nav, true).unwrap();
    assert_eq!(dismissed.owner, detail);
    assert_eq!(tree.phase(detail), Some(Phase::Started));
    assert!(tree.contains(detail));
}

#[test]
fn test_second_modal_is_refused() {
    let (mut tree, mut nav) = started_tree();
    let root = tree.root();

    tree.present_modal(root, &mut nav, ScreenKind::Alert("first".to_string()), true)
        .unwrap();
    let second =
        tree.present_modal(root, &mut nav, ScreenKind::Alert("second".to_string()), true);

    assert!(second.is_none());
    assert_eq!(
        nav.modal().unwrap().kind,
        ScreenKind::Alert("first".to_string())
    );
}
