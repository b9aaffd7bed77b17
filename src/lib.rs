// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_possible_truncation: We work with source files which won't exceed u64 limits
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - items_after_statements: Output structs are clearer near their usage
// - similar_names: Variable naming is contextually clear
// - option_if_let_else: if-let is often clearer
// - match_same_arms: Combined arms can reduce readability
// - case_sensitive_file_extension_comparisons: Extensions are normalized upstream
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::items_after_statements,
    clippy::similar_names,
    clippy::option_if_let_else,
    clippy::match_same_arms,
    clippy::case_sensitive_file_extension_comparisons
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod indexer;
pub mod ingest;
pub mod models;
