//! # Core Application Logic
//!
//! This module contains Scout's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Coordinators (flows) │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   Store    │
//!     │  Adapter   │      │  client    │      │ (players,  │
//!     │ (ratatui)  │      │ (reqwest)  │      │  prefs)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`coordinator`]: Navigation flows and the screen stack
//! - [`config`]: Settings, resolved from file, env and CLI

pub mod action;
pub mod config;
pub mod coordinator;
pub mod state;
