pub mod debt;
pub mod faculty;
pub mod group;
pub mod health;
pub mod report;
pub mod student;
pub mod subject;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /faculties/                              list, create
/// /faculties/{id}                          get, replace, delete
/// /groups/                                 list, create
/// /groups/{id}                             get, replace, delete
/// /subjects/                               list, create
/// /subjects/{id}                           get, replace, delete
/// /students/                               list, create
/// /students/{id}                           get, replace, delete
/// /debts/                                  list, create
/// /debts/{id}                              get, replace, delete
/// /debts/{id}/settle                       mark settled (PUT)
///
/// /reports/debts_by_faculty                active debts per faculty
/// /reports/debts_by_group/{group_id}       active debts per student of a group
/// /reports/student_debts/{student_id}      all debts of a student
/// /reports/group_debts/{group_id}          all debts of a group
/// ```
///
/// Collection routes answer both with and without the trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(faculty::router())
        .merge(group::router())
        .merge(subject::router())
        .merge(student::router())
        .merge(debt::router())
        .merge(report::router())
}
