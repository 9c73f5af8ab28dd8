//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`formulas`]: List of analyzed formulas with validity markers
//! - [`tokens`]: Token stream of the selected formula, lexical errors inline
//! - [`tree`]: Syntax tree of the selected formula drawn with box characters
//! - [`diagnostics`]: Verdict, canonical form, and error details
//! - [`status`]: Status bar with keybindings and the formula input prompt
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function that takes
//! the frame, its area, the data to show, a focus flag, and a mutable scroll
//! offset. Render functions clamp the offset against the content, so stale
//! offsets never draw past the end.

pub mod diagnostics;
pub mod formulas;
pub mod status;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use diagnostics::render_diagnostics_pane;
pub use formulas::render_formulas_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::{build_tree_rows, render_tree_pane, TreeRow};
