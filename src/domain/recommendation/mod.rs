//! Recommendation Module - Confidence, alternative scenarios and presentation.
//!
//! Everything here reads an `EvaluationResult`; only the scenario generator
//! re-runs the pipeline, and only with a single constraint flipped.

mod comparison;
mod confidence;
mod recommender;
mod scenarios;

pub use comparison::{ComparisonOutput, ComparisonRenderer, ProsCons, BEST_MARKER};
pub use confidence::{
    ConfidenceBreakdown, ConfidenceEstimator, MAX_CONFIDENCE, MIN_CONFIDENCE, SINGLE_OPTION_CONFIDENCE,
};
pub use recommender::{Recommendation, RecommendationPolicy, Recommender, KEY_FACTOR_COUNT};
pub use scenarios::{AlternativeScenario, ScenarioGenerator, ScenarioKind, DEFAULT_MAX_SCENARIOS};
