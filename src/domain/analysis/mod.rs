//! Analysis Module - Pure scoring, weighting, ranking and tradeoff services.
//!
//! # Components
//!
//! - `WeightingEngine` - priority normalization, emphasis, weighted totals
//! - `ContextualAdjuster` - budget/timeline/team/scale score deltas
//! - `Ranker` - dense, stable ranking by weighted score
//! - `TradeoffAnalyzer` - per-criterion leaders, laggards and compromises
//! - `Evaluator` - the pipeline tying the above to the knowledge registry
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results, so independent evaluations
//! can run concurrently without coordination.

mod context;
mod evaluation;
mod pipeline;
mod ranking;
mod tradeoff_analyzer;
mod weighting;

pub use context::{Adjustments, ContextualAdjuster};
pub use evaluation::{
    Compromise, EvaluationResult, Impact, OptionScore, RankedOption, TradeOffAnalysis,
};
pub use pipeline::Evaluator;
pub use ranking::Ranker;
pub use tradeoff_analyzer::{
    TradeoffAnalyzer, DEFAULT_COMPROMISE_GAP, HIGH_IMPACT_THRESHOLD, MEDIUM_IMPACT_THRESHOLD,
};
pub use weighting::{
    criterion_for, emphasis_factor, CriterionWeights, PriorityWeights, WeightingEngine,
    EMPHASIS_FACTORS, MAINTAINABILITY_BLEND, PRIORITY_CRITERIA,
};
