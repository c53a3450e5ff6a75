//! Route definitions for the `/debts` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::debt;
use crate::state::AppState;

/// Routes for `/debts`.
///
/// ```text
/// GET    /debts/               -> list
/// POST   /debts/               -> create
/// GET    /debts/{id}           -> get_by_id
/// PUT    /debts/{id}           -> update
/// DELETE /debts/{id}           -> delete
/// PUT    /debts/{id}/settle    -> settle
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(debt::list).post(debt::create);

    Router::new()
        .route("/debts", collection.clone())
        .route("/debts/", collection)
        .route(
            "/debts/{id}",
            get(debt::get_by_id).put(debt::update).delete(debt::delete),
        )
        .route("/debts/{id}/settle", put(debt::settle))
}
