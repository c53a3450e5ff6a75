/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers never hold a connection across
    /// statements; each repository call checks one out and returns it.
    pub pool: edudebts_db::DbPool,
}
