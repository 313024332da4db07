//! `PujaKhata` - A community organization ledger with GitHub-backed sync
//!
//! This crate tracks the members, pujas, dues contributions, income, expenses
//! and notices of a community organization. The whole dataset is one JSON
//! document, written to a local data directory on every change and mirrored
//! into a file in a GitHub repository through the contents API, with a read
//! cache, optimistic-concurrency via the file's revision token, and coalesced
//! background writes.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Command-line interface - subcommands per entity, reports, sync, session
pub mod commands;
/// Configuration management for storage, remote coordinates and the admin seed
pub mod config;
/// Core business logic - framework-agnostic ledger, auth and report operations
pub mod core;
/// Record types and the persisted ledger aggregate
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Application state - in-memory ledger, session, persistence routing
pub mod state;
/// Local persistence - named JSON blobs under the data directory
pub mod store;
/// Remote synchronization - GitHub contents API client and write coalescing
pub mod sync;

#[cfg(test)]
pub mod test_utils;
