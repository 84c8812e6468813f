//! olr-ledger
//!
//! Core library for the order-ledger service: the [`Order`] record model and
//! the CSV read/normalize pipeline ([`read::read_orders`]).
//!
//! This crate owns the record semantics only. It does **not** serve HTTP
//! (that is `olr-daemon`) and it does **not** cache or persist anything:
//! callers re-read the ledger file on every request.

pub mod read;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub use read::{parse_ledger_str, read_orders, LedgerError};

/// A normalized order record, one per well-formed ledger row.
///
/// The JSON shape is fixed: `order_id` (string), `created_at` (RFC 3339
/// string with a numeric UTC offset, never a bare `Z`), `status` (string or
/// null), `value` (number), `payment_method` (string or null).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Opaque identifier. Always non-empty: rows without one never become
    /// an `Order` (the reader drops them silently).
    pub order_id: String,
    /// Creation timestamp with an explicit offset. A trailing `Z` in the
    /// source is canonicalized to `+00:00`; explicit offsets are preserved.
    #[serde(serialize_with = "serialize_rfc3339_numeric_offset")]
    pub created_at: DateTime<FixedOffset>,
    /// Free-form status, passed through unvalidated. Empty-or-absent in the
    /// source normalizes to `None` (JSON `null`).
    pub status: Option<String>,
    /// Monetary amount. The source encodes decimals with a comma
    /// (`"199,90"`); absent/empty normalizes to `0.0`.
    pub value: f64,
    /// Free-form payment method; same empty-or-absent rule as `status`.
    pub payment_method: Option<String>,
}

/// Serialize as RFC 3339 with a numeric offset (`+00:00`, never a bare `Z`);
/// chrono's default `Serialize` impl would emit `Z` for zero offsets.
fn serialize_rfc3339_numeric_offset<S: serde::Serializer>(
    dt: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339())
}
