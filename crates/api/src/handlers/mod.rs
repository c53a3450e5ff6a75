//! Request handlers.
//!
//! Each entity submodule provides async handler functions (create, list,
//! get_by_id, update, delete) for a single table. Handlers delegate to the
//! corresponding repository in `edudebts_db` and map errors via
//! [`AppError`](crate::error::AppError). [`report`] serves the read-only
//! aggregates.

pub mod debt;
pub mod faculty;
pub mod group;
pub mod report;
pub mod student;
pub mod subject;
