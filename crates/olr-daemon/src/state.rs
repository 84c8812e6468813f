//! Shared runtime state and startup configuration for olr-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. There is no mutable
//! state at all: the ledger file is re-read in full on every request, so
//! the daemon carries only the ledger path and static build metadata.

use std::net::SocketAddr;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Startup configuration, resolved from the environment once in `main`.
///
/// No ambient globals: the ledger path travels into [`AppState`] and the
/// bind address is consumed by the server bootstrap.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the semicolon-delimited ledger file.
    pub ledger_path: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Resolve from `OLR_LEDGER_PATH` / `OLR_DAEMON_ADDR`, falling back to
    /// `data.csv` next to the process and loopback port 5001.
    pub fn from_env() -> Self {
        let ledger_path = std::env::var("OLR_LEDGER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data.csv"));

        let bind_addr = std::env::var("OLR_DAEMON_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5001)));

        Self {
            ledger_path,
            bind_addr,
        }
    }
}

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in the health response.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Cloneable (Arc) handle shared across all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static build metadata.
    pub build: BuildInfo,
    /// Ledger file location; the sole source of truth, read per request.
    pub ledger_path: PathBuf,
}

impl AppState {
    pub fn new(ledger_path: PathBuf) -> Self {
        Self {
            build: BuildInfo {
                service: "olr-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            ledger_path,
        }
    }
}
