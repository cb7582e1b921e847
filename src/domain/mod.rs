//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (criteria, scores, errors)
//! - `options` - Candidate options, user constraints and input validation
//! - `knowledge` - Per-category scoring knowledge and option normalization
//! - `analysis` - Pure scoring, weighting, ranking and tradeoff services
//! - `recommendation` - Confidence, alternative scenarios and presentation

pub mod analysis;
pub mod foundation;
pub mod knowledge;
pub mod options;
pub mod recommendation;
