//! Core types for Arogya: Sarvam wire format, call outcomes, configuration.

pub mod config;
pub mod outcome;
pub mod types;
pub mod utils;

pub use outcome::{Outcome, OutcomeKind};
