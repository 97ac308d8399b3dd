//! Service layer for bracket orchestration.
//!
//! Services load records through the repositories, run the pure bracket engine over them, and
//! persist the outcome. Every mutation runs inside a single database transaction so a failure
//! leaves prior state untouched.

pub mod bracket;
pub mod registration;
