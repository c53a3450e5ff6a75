//! Well-known debt status constants.
//!
//! `debts.status` is an open text column; these are the only values the
//! service itself writes. The column default in the initial migration must
//! match [`DEBT_ACTIVE`].

/// The debt is outstanding. Default for newly created debts and the only
/// status counted by the aggregate reports.
pub const DEBT_ACTIVE: &str = "active";

/// The debt has been closed by the settle operation.
pub const DEBT_SETTLED: &str = "settled";
