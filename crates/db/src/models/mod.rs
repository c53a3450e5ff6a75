//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update alias for full-replacement PUT (same fields as create)
//!
//! [`report`] holds the read-only aggregate row shapes.

pub mod debt;
pub mod faculty;
pub mod group;
pub mod report;
pub mod student;
pub mod subject;
