//! Confidence Estimator - How strongly the top option is favored.
//!
//! `confidence = base(gap) + (alignment - 0.5) × 0.2 + consistency`, clamped
//! to [0.1, 1.0].

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{criterion_for, OptionScore, WeightingEngine};
use crate::domain::foundation::{CriterionScores, PriorityKey, MAX_SCORE};
use crate::domain::options::Priorities;

pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Base confidence when only one option was scored.
pub const SINGLE_OPTION_CONFIDENCE: f64 = 0.5;

/// Scale applied to the alignment's distance from 0.5.
pub const ALIGNMENT_SCALE: f64 = 0.2;

/// Standard deviation at which the consistency bonus reaches zero.
pub const CONSISTENCY_STD_DEV_LIMIT: f64 = 20.0;

pub const MAX_CONSISTENCY_BONUS: f64 = 0.2;

/// Components of a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    /// From the rank-1 / rank-2 score gap.
    pub base: f64,
    /// 0-1 fit of the top option to the user's priorities.
    pub alignment: f64,
    pub alignment_adjustment: f64,
    pub consistency_bonus: f64,
    /// Final clamped value.
    pub value: f64,
}

pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    /// Estimates confidence from option scores ordered best first.
    pub fn estimate(ranked: &[&OptionScore], priorities: &Priorities) -> ConfidenceBreakdown {
        let Some(top) = ranked.first() else {
            return ConfidenceBreakdown {
                base: MIN_CONFIDENCE,
                alignment: 0.0,
                alignment_adjustment: 0.0,
                consistency_bonus: 0.0,
                value: MIN_CONFIDENCE,
            };
        };

        let gap = ranked
            .get(1)
            .map(|second| top.weighted_score - second.weighted_score);
        let base = Self::base_from_gap(gap);
        let alignment = Self::alignment(&top.criteria_scores, priorities);
        let alignment_adjustment = (alignment - 0.5) * ALIGNMENT_SCALE;
        let consistency_bonus = Self::consistency_bonus(&top.criteria_scores);

        let value = (base + alignment_adjustment + consistency_bonus).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        ConfidenceBreakdown {
            base,
            alignment,
            alignment_adjustment,
            consistency_bonus,
            value,
        }
    }

    /// Base value from the gap between the first two options.
    pub fn base_from_gap(gap: Option<f64>) -> f64 {
        match gap {
            None => SINGLE_OPTION_CONFIDENCE,
            Some(gap) if gap > 20.0 => 0.9,
            Some(gap) if gap > 10.0 => 0.75,
            Some(gap) if gap > 5.0 => 0.6,
            Some(_) => 0.4,
        }
    }

    /// Weighted average of the option's scores under plain (unemphasized)
    /// normalized priorities, scaled to 0-1.
    pub fn alignment(scores: &CriterionScores, priorities: &Priorities) -> f64 {
        let weights = WeightingEngine::normalize(priorities);
        let weighted: f64 = PriorityKey::ALL
            .iter()
            .map(|key| weights.get(*key) * scores.get(criterion_for(*key)))
            .sum();
        (weighted / MAX_SCORE).clamp(0.0, 1.0)
    }

    /// Rewards even performance across criteria.
    pub fn consistency_bonus(scores: &CriterionScores) -> f64 {
        ((CONSISTENCY_STD_DEV_LIMIT - scores.std_dev()) / 100.0).clamp(0.0, MAX_CONSISTENCY_BONUS)
    }
}
