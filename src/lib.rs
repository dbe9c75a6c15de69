//! # screq
//!
//! Static `sc_require` injector for SproutCore-style apps. Scans an app's
//! source tree twice: a definition pass mapping `App.Symbol` names to the
//! files that define them, then a usage pass that rewrites each file with a
//! license banner and one `sc_require('<module>');` directive per cross-file
//! dependency, so the module loader can load files in a valid order without
//! manual bookkeeping.
//!
//! Re-running is safe: previously injected headers and directives are
//! recognized and replaced, never stacked. Two kinds of hand-authored lines
//! survive every run — the bootstrap `sc_require('core');` and any require
//! annotated with an `@ignore` marker comment.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use screq::args::ParsedArgs;
//! use screq::run_require_processor;
//! use std::path::PathBuf;
//!
//! let parsed = ParsedArgs {
//!     root: PathBuf::from("/sc/apps/dark_horse"),
//!     namespace: "DarkHorse".to_string(),
//!     ..ParsedArgs::default()
//! };
//! let report = run_require_processor(&parsed).unwrap();
//! println!("{} definitions", report.definitions.len());
//! ```
//!
//! This is textual pattern matching, not parsing: no AST, no scope
//! resolution, no alias handling. Usages inside multi-line function bodies
//! and comment lines are deliberately not counted as dependencies.

/// The two-pass pipeline: patterns, symbol table, definition scan, guard
/// filter, require injection, and the runner tying them together.
pub mod analyzer;

/// Command-line argument parsing.
pub mod args;

/// Optional `.screq/config.toml` support (extra ignores, banner text).
pub mod config;

/// File walking, eligibility filtering, and module identifier derivation.
pub mod fs_utils;

/// Progress UI (spinners, status lines).
pub mod progress;

/// Shared constants and the run report types.
pub mod types;

pub use analyzer::run_require_processor;
pub use analyzer::symbols::SymbolTable;
pub use args::ParsedArgs;
pub use types::{FileReport, OutputMode, RunReport};
