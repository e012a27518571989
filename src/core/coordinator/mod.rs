//! # Coordinators
//!
//! Navigation flows arranged as a tree. A parent creates a child, registers
//! it and starts it; when the child's screen goes away the child finishes
//! and the parent drops it.
//!
//! - [`tree`]: the arena that owns every coordinator by id
//! - [`flow`]: the `Coordinator` trait and the `Route`s screens can raise
//! - [`flows`]: the concrete flows (main list, search, detail, ...)
//! - [`navigation`]: the screen stack the flows push onto

pub mod flow;
pub mod flows;
pub mod navigation;
pub mod tree;

pub use flow::{Coordinator, FlowKind, Route};
pub use flows::MainCoordinator;
pub use navigation::{NavigationContext, Screen, ScreenId, ScreenKind};
pub use tree::{CoordinatorId, CoordinatorTree, Phase};
