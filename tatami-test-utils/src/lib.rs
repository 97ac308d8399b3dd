//! Shared test harness for the tatami workspace.
//!
//! Tests configure an in-memory SQLite database with [`TestBuilder`], then use the returned
//! [`TestContext`] and its fixture helpers to insert players, categories, tournaments, and
//! registrations before exercising repositories or services.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::tournament::CLUBS, TestBuilder, TestContext, TestError};
}
