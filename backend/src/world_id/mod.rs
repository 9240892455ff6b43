//! World ID proof verification.
//!
//! The endpoint in [`crate::routes`] treats proofs as opaque payloads and hands them
//! to a [`Verifier`]. The production implementation, [`DeveloperPortalVerifier`],
//! relays the proof to the World Developer Portal which performs the actual
//! zero-knowledge proof checks.
//!
//! # Components
//! - `error`: Failures that prevent a verification result from being produced
//! - `types`: Proof payload, verification result and configuration types
//! - `verifier`: The `Verifier` capability and its Developer Portal client
//! - `request`: HTTP client construction for outbound calls (internal)

/// Verification failures
pub mod error;
/// Payload, result and configuration types
pub mod types;
/// The verifier capability and the Developer Portal client
pub mod verifier;

/// HTTP client utilities for communicating with the Developer Portal.
mod request;

pub use error::VerifierError;
pub use types::{AppId, ProofPayload, VerificationResult, WorldIdConfig};
pub use verifier::{DeveloperPortalVerifier, Verifier};
