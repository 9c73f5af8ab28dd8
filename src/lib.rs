//! # Introduction
//!
//! Logitty turns short propositional-logic formulas into validated syntax
//! trees, reporting precise lexical and syntax diagnostics on malformed
//! input.  The token stream and the resulting tree are then explored through
//! a terminal UI built with [ratatui](https://docs.rs/ratatui), or exported
//! as Graphviz DOT text.
//!
//! ## Analysis pipeline
//!
//! ```text
//! Formula → Lexer → Tokens → Parser → AST → Exporter → TUI / DOT
//! ```
//!
//! 1. [`parser`] — tokenises the formula and builds an AST; lexical errors
//!    are recoverable records, syntax errors are `Result::Err` values.
//! 2. [`export`] — flattens an AST into an ordered
//!    [`export::GraphDescription`] with deterministic pre-order ids, and
//!    renders it as DOT.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported language
//!
//! Variables: `p`..`z` (the letter `o` is the OR connective, not a variable).
//! Constants: `0`, `1`.
//! Connectives, tightest binding first: `~`, `^`, `o`, `=>`, `<=>`.
//! Parentheses group; spaces and tabs separate.

pub mod export;
pub mod parser;
pub mod ui;
