//! Route definitions for the read-only `/reports` aggregates.

use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/debts_by_faculty", get(report::debts_by_faculty))
        .route(
            "/reports/debts_by_group/{group_id}",
            get(report::debts_by_group),
        )
        .route(
            "/reports/student_debts/{student_id}",
            get(report::student_debts),
        )
        .route("/reports/group_debts/{group_id}", get(report::group_debts))
}
