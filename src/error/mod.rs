//! Error types for the tatami crate.
//!
//! Domain failures live in [`BracketError`] and configuration failures in [`ConfigError`]. Both
//! are aggregated with library errors into [`Error`], which every service returns. Use
//! [`Error::kind`] to map an error onto the notice shown to whoever triggered the operation.

pub mod bracket;
pub mod config;
pub mod kind;

use thiserror::Error;

pub use self::{bracket::BracketError, config::ConfigError, kind::ErrorKind};

/// Main error type for the tatami crate.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Bracket generation, advancement, or registration rejected the request.
    #[error(transparent)]
    BracketError(#[from] BracketError),
    /// Internal error indicating a bug in tatami's code.
    ///
    /// This error should never occur in normal operation, it points to a programming error
    /// such as a bracket whose stored structure does not match its format.
    #[error("Internal error, this indicates a bug in tatami: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON serialization error when rendering output.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}
