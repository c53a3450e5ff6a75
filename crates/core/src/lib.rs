//! Shared primitives for the EduDebts service.
//!
//! Holds the identifier type, the domain error enum, and well-known debt
//! status values. Nothing in here touches the database or HTTP.

pub mod debt_status;
pub mod error;
pub mod types;
