//! Route definitions for the `/groups` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::group;
use crate::state::AppState;

/// Routes for `/groups`.
///
/// ```text
/// GET    /groups/           -> list
/// POST   /groups/           -> create
/// GET    /groups/{id}       -> get_by_id
/// PUT    /groups/{id}       -> update
/// DELETE /groups/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(group::list).post(group::create);

    Router::new()
        .route("/groups", collection.clone())
        .route("/groups/", collection)
        .route(
            "/groups/{id}",
            get(group::get_by_id)
                .put(group::update)
                .delete(group::delete),
        )
}
