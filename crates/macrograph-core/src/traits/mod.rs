//! Collaborator seams.

pub mod outcome_provider;

pub use outcome_provider::{OutcomeProvider, OutcomeRecord};
