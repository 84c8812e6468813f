//! Response types for the olr-daemon HTTP endpoints.
//!
//! These types are `Serialize` so they can be JSON-encoded by Axum and
//! decoded by tests. No business logic lives here; the orders payload
//! itself is `Vec<olr_ledger::Order>`, serialized directly.

use serde::Serialize;

// ---------------------------------------------------------------------------
// /health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// Read failure (500)
// ---------------------------------------------------------------------------

/// Response body when the ledger cannot be read or contains a malformed
/// `value` / `created_at`. The request fails as a whole: a partial or
/// truncated array is never returned.
#[derive(Debug, Clone, Serialize)]
pub struct ReadFailedResponse {
    pub error: String,
}
