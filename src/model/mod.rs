//! Serializable views returned to request-handling glue.

pub mod bracket;
pub mod registration;
