//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes for `/students`.
///
/// ```text
/// GET    /students/           -> list
/// POST   /students/           -> create
/// GET    /students/{id}       -> get_by_id
/// PUT    /students/{id}       -> update
/// DELETE /students/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(student::list).post(student::create);

    Router::new()
        .route("/students", collection.clone())
        .route("/students/", collection)
        .route(
            "/students/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
}
