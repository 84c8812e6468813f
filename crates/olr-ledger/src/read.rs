//! CSV reader for the on-disk order ledger.
//!
//! This module converts a semicolon-delimited ledger file (or in-memory
//! ledger text) into [`Order`] values. It is the **read** side only: no
//! writes, no caching — the file is opened, fully read, and closed within
//! one call.
//!
//! ## Column contract (case-insensitive, order-independent)
//!
//! | Column           | Type / example              | Notes                          |
//! |------------------|-----------------------------|--------------------------------|
//! | `order_id`       | `A1`                        | Empty/missing → row is skipped |
//! | `created_at`     | `2024-01-15T10:30:00Z`      | `Z` canonicalized to `+00:00`  |
//! | `status`         | `paid`                      | Pass-through; empty → null     |
//! | `value`          | `199,90`                    | Decimal comma; empty → `0.0`   |
//! | `payment_method` | `card`                      | Pass-through; empty → null     |
//!
//! The first line is the header; columns are matched by name, so extra
//! columns and reordered columns are tolerated. An optional UTF-8 BOM is
//! stripped before the header is read.
//!
//! ## Failure asymmetry
//!
//! A row without an `order_id` is treated as a blank template row and
//! skipped silently. A non-blank row with a malformed `value` or
//! `created_at` is a data-integrity fault: the whole read fails and no
//! partial result is returned.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::Order;

const DELIMITER: char = ';';

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced by ledger reading.
///
/// There is deliberately no "missing order_id" variant: such rows are
/// filtered out silently, not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger file could not be opened or read.
    FileUnavailable { path: String, msg: String },
    /// A `value` field could not be parsed as a decimal number (after the
    /// comma → dot substitution).
    MalformedValue { row: usize, raw: String },
    /// A `created_at` field was missing, empty, or unparsable.
    MalformedTimestamp { row: usize, raw: String },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::FileUnavailable { path, msg } => {
                write!(f, "ledger file unavailable '{path}': {msg}")
            }
            LedgerError::MalformedValue { row, raw } => {
                write!(f, "ledger row {row}: cannot parse 'value' from '{raw}'")
            }
            LedgerError::MalformedTimestamp { row, raw } => {
                if raw.is_empty() {
                    write!(f, "ledger row {row}: 'created_at' is missing or empty")
                } else {
                    write!(f, "ledger row {row}: cannot parse 'created_at' from '{raw}'")
                }
            }
        }
    }
}

impl std::error::Error for LedgerError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read the ledger file at `path` and return all well-formed rows as
/// [`Order`] values, preserving source row order.
///
/// Rows with an empty or missing `order_id` are skipped silently. A row
/// with a malformed `value` or `created_at` aborts the entire read — no
/// partial output is ever returned.
pub fn read_orders(path: &Path) -> Result<Vec<Order>, LedgerError> {
    let buf = std::fs::read_to_string(path).map_err(|e| LedgerError::FileUnavailable {
        path: path.display().to_string(),
        msg: e.to_string(),
    })?;

    parse_ledger_str(&buf)
}

/// Parse ledger text from a string slice (useful for tests without touching
/// the filesystem).
///
/// See [`read_orders`] for the full contract.
pub fn parse_ledger_str(src: &str) -> Result<Vec<Order>, LedgerError> {
    // A UTF-8 BOM is an encoding artifact, not content.
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);

    let mut lines = src.lines();

    // --- Header ---
    let header_line = match lines.next() {
        Some(l) => l,
        None => return Ok(Vec::new()),
    };

    let col_idx = build_col_index(header_line);

    // --- Data rows ---
    let mut out = Vec::new();
    let mut row_num: usize = 1; // 1-based, header = 1

    for line in lines {
        row_num += 1;

        if line.trim().is_empty() {
            continue;
        }

        // Field split: semicolon-separated, no quoting (sufficient for the
        // ledger export format).
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        let get = |name: &str| -> Option<&str> {
            let i = *col_idx.get(name)?;
            fields.get(i).copied().map(str::trim)
        };

        // Blank-row tolerance: no identifier means this row was never a
        // real order. Skip without error.
        let order_id = match get("order_id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => continue,
        };

        let value = parse_value(get("value"), row_num)?;
        let created_at = parse_created_at(get("created_at"), row_num)?;

        out.push(Order {
            order_id,
            created_at,
            status: pass_through(get("status")),
            value,
            payment_method: pass_through(get("payment_method")),
        });
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Parse a monetary value written with a decimal comma (`"199,90"`).
///
/// Absent/empty yields `0.0`. Anything else must parse as a decimal number
/// after every `,` is replaced with `.` — so a thousands-separated value
/// like `"10.000,50"` becomes `"10.000.50"` and fails, by contract.
fn parse_value(raw: Option<&str>, row: usize) -> Result<f64, LedgerError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(0.0),
    };

    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| LedgerError::MalformedValue {
            row,
            raw: raw.to_string(),
        })
}

/// Parse a `created_at` timestamp into an explicit-offset datetime.
///
/// A trailing `Z` is substituted with `+00:00` before parsing, so zoned-UTC
/// notation canonicalizes to explicit-offset notation. An explicit offset
/// is preserved as-is. An offset-less `YYYY-MM-DDTHH:MM:SS` timestamp is
/// accepted and assumed UTC. Missing, empty, or unparsable input is fatal.
fn parse_created_at(raw: Option<&str>, row: usize) -> Result<DateTime<FixedOffset>, LedgerError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => {
            return Err(LedgerError::MalformedTimestamp {
                row,
                raw: String::new(),
            })
        }
    };

    let canonical = match raw.strip_suffix('Z') {
        Some(prefix) => format!("{prefix}+00:00"),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&canonical)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&canonical, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(&canonical, "%Y-%m-%d %H:%M:%S%.f"))
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .map_err(|_| LedgerError::MalformedTimestamp {
            row,
            raw: raw.to_string(),
        })
}

/// Pass-through rule for the free-form fields: empty and absent both
/// normalize to `None`.
fn pass_through(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a case-insensitive column-name → index map from the header line.
///
/// No column is required here: a ledger missing `order_id` simply yields
/// zero orders, and the per-row parsers report missing `created_at`.
fn build_col_index(header_line: &str) -> HashMap<String, usize> {
    header_line
        .split(DELIMITER)
        .enumerate()
        .map(|(i, col)| (col.trim().to_ascii_lowercase(), i))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
