//! # Core Application Logic
//!
//! This module contains Permsync's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (JSON files)   │
//!                    │  • ListModel (CRUD)     │
//!                    │  • Viewport (draw plan) │
//!                    │  • update() (keys)      │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`mode`]: `Mode`, which of the two lists is active
//! - [`store`]: `Store`, load/save of `allowed.json` and `blacklist.json`
//! - [`list_model`]: `ListModel`, index-based CRUD and list transfer
//! - [`viewport`]: `compute_draw_plan`, the visible window of a long list
//! - [`state`]: `App` and `EditorState`, all state in one place
//! - [`action`]: `Action` and `update()`, the input state machine
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod list_model;
pub mod mode;
pub mod state;
pub mod store;
pub mod viewport;

// Re-export commonly used types for convenience
pub use action::{Action, Effect, update};
pub use list_model::ListModel;
pub use mode::Mode;
pub use state::App;
pub use store::Store;
