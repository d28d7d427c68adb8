//! # Core Screen Logic
//!
//! The catalog screen's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Fetch
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │  spawns →  │  Catalog   │
//!             │  Adapter   │  ← Action  │    API     │
//!             │ (ratatui)  │            │ (reqwest)  │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`pipeline`]: Per-stage load status and stale-response guard
//! - [`selection`]: Scroll offset → category index inference
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod pipeline;
pub mod selection;
pub mod state;
