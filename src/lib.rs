//! Tournament bracket generation and advancement for martial-arts clubs.
//!
//! Registered players are grouped into cohorts by gender, age category, and weight category.
//! Each cohort becomes a bracket: a round-robin for up to five participants, single elimination
//! for more, with first-round pairings spread across clubs. Recording a match winner advances
//! them through the elimination tree, and placements are derived from the matches on read.
//!
//! - [`bracket`] holds the pure engine and does no I/O
//! - [`service`] orchestrates the engine over a sea-orm database
//! - [`data`] holds the repositories the services use

pub mod bracket;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
