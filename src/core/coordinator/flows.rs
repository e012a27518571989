//! Concrete flows.
//!
//! ```text
//! MainCoordinator (player list)
//! ├── SearchCoordinator (modal form)
//! ├── SavedPlayersCoordinator
//! │   └── PlayerDetailCoordinator
//! │       └── ComparisonCoordinator
//! └── PlayerDetailCoordinator
//!     └── ComparisonCoordinator
//! ```
//!
//! `MainCoordinator` handles every route, so anything a child cannot
//! handle ends up there.

use super::flow::{Coordinator, FlowKind, Route};
use super::navigation::{NavigationContext, ScreenId, ScreenKind};
use super::tree::CoordinatorId;
use crate::api::{Player, SearchParameters};

fn flow_for(route: &Route) -> Box<dyn Coordinator> {
    match route {
        Route::Search(params) => Box::new(SearchCoordinator::new(params.clone())),
        Route::PlayerDetail(player) => Box::new(PlayerDetailCoordinator::new(player.clone())),
        Route::Comparison(left, right) => {
            Box::new(ComparisonCoordinator::new(left.clone(), right.clone()))
        }
        Route::SavedPlayers => Box::new(SavedPlayersCoordinator::default()),
    }
}

/// Root flow. Shows search results and builds every other flow on request.
#[derive(Default)]
pub struct MainCoordinator {
    screen: Option<ScreenId>,
}

impl MainCoordinator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Coordinator for MainCoordinator {
    fn kind(&self) -> FlowKind {
        FlowKind::Main
    }

    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        self.screen = Some(nav.push(id, ScreenKind::PlayerList));
    }

    fn screen_ref(&self) -> Option<ScreenId> {
        self.screen
    }

    fn child_for(&self, route: &Route) -> Option<Box<dyn Coordinator>> {
        Some(flow_for(route))
    }
}

pub struct SearchCoordinator {
    params: SearchParameters,
    screen: Option<ScreenId>,
}

impl SearchCoordinator {
    pub fn new(params: SearchParameters) -> Self {
        Self {
            params,
            screen: None,
        }
    }
}

impl Coordinator for SearchCoordinator {
    fn kind(&self) -> FlowKind {
        FlowKind::Search
    }

    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        self.screen =
            self.present_modal(id, nav, ScreenKind::SearchForm(self.params.clone()), true);
    }

    fn screen_ref(&self) -> Option<ScreenId> {
        self.screen
    }
}

pub struct PlayerDetailCoordinator {
    player: Player,
    screen: Option<ScreenId>,
}

impl PlayerDetailCoordinator {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            screen: None,
        }
    }
}

impl Coordinator for PlayerDetailCoordinator {
    fn kind(&self) -> FlowKind {
        FlowKind::PlayerDetail
    }

    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        self.screen = Some(nav.push(id, ScreenKind::PlayerDetail(self.player.clone())));
    }

    fn screen_ref(&self) -> Option<ScreenId> {
        self.screen
    }

    fn child_for(&self, route: &Route) -> Option<Box<dyn Coordinator>> {
        match route {
            Route::Comparison(..) => Some(flow_for(route)),
            _ => None,
        }
    }
}

/// Leaf flow: two players side by side.
pub struct ComparisonCoordinator {
    left: Player,
    right: Player,
    screen: Option<ScreenId>,
}

impl ComparisonCoordinator {
    pub fn new(left: Player, right: Player) -> Self {
        Self {
            left,
            right,
            screen: None,
        }
    }
}

impl Coordinator for ComparisonCoordinator {
    fn kind(&self) -> FlowKind {
        FlowKind::Comparison
    }

    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        self.screen = Some(nav.push(
            id,
            ScreenKind::Comparison(self.left.clone(), self.right.clone()),
        ));
    }

    fn screen_ref(&self) -> Option<ScreenId> {
        self.screen
    }
}

#[derive(Default)]
pub struct SavedPlayersCoordinator {
    screen: Option<ScreenId>,
}

impl Coordinator for SavedPlayersCoordinator {
    fn kind(&self) -> FlowKind {
        FlowKind::SavedPlayers
    }

    fn start(&mut self, id: CoordinatorId, nav: &mut NavigationContext) {
        self.screen = Some(nav.push(id, ScreenKind::SavedPlayers));
    }

    fn screen_ref(&self) -> Option<ScreenId> {
        self.screen
    }

    fn child_for(&self, route: &Route) -> Option<Box<dyn Coordinator>> {
        match route {
            Route::PlayerDetail(_) => Some(flow_for(route)),
            _ => None,
        }
    }
}
