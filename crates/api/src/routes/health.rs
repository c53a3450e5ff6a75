//! Liveness endpoint for the ledger service.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct LedgerHealth {
    /// `"ok"` when the ledger database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    /// Newest applied migration; `null` when the database is unreachable.
    pub schema_version: Option<i64>,
}

async fn ledger_health(State(state): State<AppState>) -> Json<LedgerHealth> {
    let schema_version = match edudebts_db::schema_version(&state.pool).await {
        Ok(version) => version,
        Err(err) => {
            tracing::warn!(error = %err, "Ledger database unreachable");
            None
        }
    };
    let up = schema_version.is_some();

    Json(LedgerHealth {
        status: if up { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if up { "up" } else { "down" },
        schema_version,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(ledger_health))
}
