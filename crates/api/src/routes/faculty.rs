//! Route definitions for the `/faculties` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faculty;
use crate::state::AppState;

/// Routes for `/faculties`.
///
/// ```text
/// GET    /faculties/           -> list
/// POST   /faculties/           -> create
/// GET    /faculties/{id}       -> get_by_id
/// PUT    /faculties/{id}       -> update
/// DELETE /faculties/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(faculty::list).post(faculty::create);

    Router::new()
        .route("/faculties", collection.clone())
        .route("/faculties/", collection)
        .route(
            "/faculties/{id}",
            get(faculty::get_by_id)
                .put(faculty::update)
                .delete(faculty::delete),
        )
}
