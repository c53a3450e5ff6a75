//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue exactly one statement.

pub mod debt_repo;
pub mod faculty_repo;
pub mod group_repo;
pub mod report_repo;
pub mod student_repo;
pub mod subject_repo;

pub use debt_repo::DebtRepo;
pub use faculty_repo::FacultyRepo;
pub use group_repo::GroupRepo;
pub use report_repo::ReportRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
