//! # TUI Components
//!
//! All UI components for the terminal interface. Each is a stateless,
//! props-based renderer implementing [`Component`](super::component::Component):
//!
//! - `TitleBar`: centered title naming the current list, plus the key legend
//! - `StatusLine`: item count, or the edit/add prompt with the live buffer
//! - `RuleList`: the visible window of the list and its scroll indicators
//! - `ConfirmBar`: pending y/n question or the last write error
//!
//! Components receive external data as props, not by reaching into `App`.
//! `ui.rs` reads the state once per frame and hands each component what it
//! needs.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (rows 0-1)
//! ├── status_line.rs  (row 3)
//! ├── rule_list.rs    (indicators + list)
//! └── confirm_bar.rs  (last row)
//! ```

pub mod confirm_bar;
pub mod rule_list;
pub mod status_line;
pub mod title_bar;

pub use confirm_bar::ConfirmBar;
pub use rule_list::RuleList;
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
