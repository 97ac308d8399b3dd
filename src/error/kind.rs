use super::{BracketError, Error};

/// How an error should be surfaced to the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request had nothing to act on, shown as a notice
    Input,
    /// A field of the request was invalid
    Validation,
    /// The request conflicts with the current state of the tournament
    Integrity,
    /// A referenced record does not exist or belongs to another tournament
    NotFound,
    /// Storage, configuration, or programming failure
    Internal,
}

impl Error {
    /// Classify the error for presentation
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BracketError(err) => err.kind(),

            // Configuration errors only occur at startup before any request is handled
            Self::ConfigError(_) => ErrorKind::Internal,

            Self::InternalError(_) => ErrorKind::Internal,
            Self::DbErr(_) => ErrorKind::Internal,
            Self::SerdeJsonError(_) => ErrorKind::Internal,
        }
    }
}

impl BracketError {
    /// Classify the domain error for presentation
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoEligibleRegistrations { .. } => ErrorKind::Input,

            Self::WinnerNotInMatch { .. } => ErrorKind::Validation,
            Self::PlayerNotEligible { .. } => ErrorKind::Validation,

            Self::TournamentCompleted { .. } => ErrorKind::Integrity,
            Self::DownstreamMatchDecided { .. } => ErrorKind::Integrity,

            Self::TournamentNotFound(_) => ErrorKind::NotFound,
            Self::MatchNotFound { .. } => ErrorKind::NotFound,
            Self::PlayerNotFound(_) => ErrorKind::NotFound,
        }
    }
}
