//! Axum router and all HTTP handlers for olr-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. All handlers are `pub(crate)` so the scenario tests in
//! `tests/` can compose the router directly.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{debug, error};

use olr_ledger::read_orders;

use crate::{
    api_types::{HealthResponse, ReadFailedResponse},
    state::AppState,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/orders", get(orders))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

/// Return the full ledger as a JSON array of normalized orders.
///
/// The file is opened, fully read, and closed within this request; there is
/// no cache and no pagination. Any malformed `value` / `created_at` or an
/// unreadable file fails the whole request with a 500 JSON error body — the
/// response is either the complete array or an error, never a partial array.
pub(crate) async fn orders(State(st): State<Arc<AppState>>) -> Response {
    match read_orders(&st.ledger_path) {
        Ok(orders) => {
            debug!(count = orders.len(), "ledger read complete");
            (StatusCode::OK, Json(orders)).into_response()
        }
        Err(e) => {
            error!(error = %e, path = %st.ledger_path.display(), "ledger read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReadFailedResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
