//! Foundation module - Shared domain primitives.
//!
//! Contains the criterion vocabulary, score bounds, and error types
//! shared by every stage of the evaluation pipeline.

mod criterion;
mod errors;
mod score;

pub use criterion::{Criterion, PriorityKey};
pub use errors::{DomainError, ErrorCode, ScoringError, ValidationError};
pub use score::{clamp_score, to_normalized, CriterionScores, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
