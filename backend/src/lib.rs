//! World ID proof verification relay
//!
//! Accepts World ID proofs over HTTP, forwards them to the verification service
//! with the configured app id and action, and relays the result.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Configuration, errors and extractors shared by the routes
pub mod types;

/// Proof verification
pub mod world_id;
