//! Route definitions for the `/subjects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subject;
use crate::state::AppState;

/// Routes for `/subjects`.
///
/// ```text
/// GET    /subjects/           -> list
/// POST   /subjects/           -> create
/// GET    /subjects/{id}       -> get_by_id
/// PUT    /subjects/{id}       -> update
/// DELETE /subjects/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(subject::list).post(subject::create);

    Router::new()
        .route("/subjects", collection.clone())
        .route("/subjects/", collection)
        .route(
            "/subjects/{id}",
            get(subject::get_by_id)
                .put(subject::update)
                .delete(subject::delete),
        )
}
