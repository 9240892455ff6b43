use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix every World ID application identifier starts with
const APP_ID_PREFIX: &str = "app_";

/// A World ID application identifier, e.g. `app_staging_509648994ab005fe79c4ddd0449606ca`.
///
/// The value is kept as provided. Identifiers without the `app_` prefix are not
/// rejected here, the verification service is the authority on their validity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppId(String);

impl AppId {
    /// Wraps a raw application identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether the identifier has the `app_<suffix>` shape expected by World ID.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0
            .strip_prefix(APP_ID_PREFIX)
            .is_some_and(|suffix| !suffix.is_empty())
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiers scoping every verification request.
///
/// Loaded once at startup and shared read-only by all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldIdConfig {
    /// The World ID app identifier
    pub app_id: AppId,
    /// The action the proofs are generated for (e.g. "login", "vote")
    pub action: String,
}

/// The proof submitted by a client.
///
/// Its shape (`proof`, `merkle_root`, `nullifier_hash`, `verification_level`, ...)
/// belongs to the World ID protocol; this service only requires a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ProofPayload(Map<String, Value>);

impl ProofPayload {
    /// Wraps the fields of a proof object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The proof fields as submitted
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the payload, returning its fields
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Outcome reported by the verifier.
///
/// Serializes to a flat object: `success` next to every auxiliary field the
/// verifier returned (`code`, `detail`, `attribute`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationResult {
    /// Whether the proof was accepted
    pub success: bool,
    /// Verifier-defined details, usually only present on failure
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl VerificationResult {
    /// An accepted proof with no further details.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            success: true,
            details: Map::new(),
        }
    }

    /// A rejected proof carrying the verifier's error fields.
    ///
    /// A `success` entry in `details` is dropped so the flattened output never
    /// contradicts the outcome.
    #[must_use]
    pub fn rejected(mut details: Map<String, Value>) -> Self {
        details.remove("success");
        Self {
            success: false,
            details,
        }
    }

    /// The verifier's error code, if any (e.g. `invalid_proof`)
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.details.get("code").and_then(Value::as_str)
    }
}
