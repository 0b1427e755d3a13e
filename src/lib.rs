//! secret-santa - Draw Secret Santa pairings and serve giftee lookups
//!
//! This library loads a participant roster, draws a derangement (nobody
//! gives to themselves) and answers "who am I buying for?" queries through an
//! HTTP-agnostic API layer and a small `tiny_http` adapter.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod output;
pub mod pairing;
pub mod paths;
pub mod roster;
pub mod server;
