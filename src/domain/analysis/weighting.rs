//! Weighting Engine - Priority normalization, emphasis, and weighted totals.
//!
//! # Algorithm
//!
//! 1. Normalize the five raw 1-5 priorities to sum to 1 (all zero → 0.2 each).
//! 2. Multiply each by its emphasis factor (`1→0.5 … 5→1.5`) and re-normalize.
//! 3. Map priorities onto the six criteria through `PRIORITY_CRITERIA`;
//!    maintainability gets the `MAINTAINABILITY_BLEND` composite.
//! 4. `Σ(score × weight) / Σ(weight)` over the criteria present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Criterion, CriterionScores, PriorityKey, NEUTRAL_SCORE};
use crate::domain::options::Priorities;

/// Emphasis multiplier per raw priority value.
pub const EMPHASIS_FACTORS: [(i64, f64); 5] = [(1, 0.5), (2, 0.8), (3, 1.0), (4, 1.2), (5, 1.5)];

/// Direct priority → criterion mapping.
pub const PRIORITY_CRITERIA: [(PriorityKey, Criterion); 5] = [
    (PriorityKey::Cost, Criterion::Cost),
    (PriorityKey::Performance, Criterion::Performance),
    (PriorityKey::EaseOfUse, Criterion::LearningCurve),
    (PriorityKey::Scalability, Criterion::Scalability),
    (PriorityKey::VendorLockIn, Criterion::VendorLockIn),
];

/// Maintainability has no priority of its own; it blends these.
pub const MAINTAINABILITY_BLEND: [(PriorityKey, f64); 2] =
    [(PriorityKey::Cost, 0.3), (PriorityKey::Performance, 0.2)];

/// Criterion a priority key drives.
pub fn criterion_for(key: PriorityKey) -> Criterion {
    PRIORITY_CRITERIA
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, c)| *c)
        .unwrap_or(Criterion::Maintainability)
}

/// Emphasis factor for a raw priority. Values outside 1-5 are unemphasized,
/// except values above 5 which take the top factor.
pub fn emphasis_factor(raw: i64) -> f64 {
    if raw > 5 {
        return 1.5;
    }
    EMPHASIS_FACTORS
        .iter()
        .find(|(value, _)| *value == raw)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// One weight per priority key, in `PriorityKey::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights([f64; 5]);

impl PriorityWeights {
    pub fn from_values(values: [f64; 5]) -> Self {
        Self(values)
    }

    pub fn get(&self, key: PriorityKey) -> f64 {
        self.0[Self::index(key)]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn values(&self) -> [f64; 5] {
        self.0
    }

    /// Scales the weights to sum to 1; an all-zero set becomes uniform.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= 0.0 {
            return Self([1.0 / 5.0; 5]);
        }
        Self(self.0.map(|w| w / sum))
    }

    fn index(key: PriorityKey) -> usize {
        PriorityKey::ALL
            .iter()
            .position(|k| *k == key)
            .unwrap_or_default()
    }
}

/// Weight per standard criterion.
pub type CriterionWeights = BTreeMap<Criterion, f64>;

/// Combines priorities and criterion scores into one weighted total.
pub struct WeightingEngine;

impl WeightingEngine {
    /// Step 1: raw priorities scaled to sum to 1. Negative values count as zero.
    pub fn normalize(priorities: &Priorities) -> PriorityWeights {
        let raw = PriorityKey::ALL.map(|key| priorities.get(key).max(0) as f64);
        PriorityWeights(raw).normalized()
    }

    /// Step 2: normalized weights multiplied by emphasis and re-normalized.
    pub fn emphasize(priorities: &Priorities) -> PriorityWeights {
        let normalized = Self::normalize(priorities);
        let emphasized =
            PriorityKey::ALL.map(|key| normalized.get(key) * emphasis_factor(priorities.get(key)));
        PriorityWeights(emphasized).normalized()
    }

    /// Step 3: emphasized priority weights mapped onto all six criteria.
    pub fn criterion_weights(priorities: &Priorities) -> CriterionWeights {
        let emphasized = Self::emphasize(priorities);
        let mut weights: CriterionWeights = PRIORITY_CRITERIA
            .iter()
            .map(|(key, criterion)| (*criterion, emphasized.get(*key)))
            .collect();
        let maintainability = MAINTAINABILITY_BLEND
            .iter()
            .map(|(key, share)| share * emphasized.get(*key))
            .sum();
        weights.insert(Criterion::Maintainability, maintainability);
        weights
    }

    /// Step 4: weighted average over the criteria present in `scores`.
    pub fn weighted_score(scores: &CriterionScores, priorities: &Priorities) -> f64 {
        Self::weighted_score_with(scores, &Self::criterion_weights(priorities))
    }

    /// Weighted average using precomputed criterion weights.
    ///
    /// Returns the neutral score when no weight applies.
    pub fn weighted_score_with(scores: &CriterionScores, weights: &CriterionWeights) -> f64 {
        let (total, weight_sum) = scores
            .iter()
            .filter_map(|(criterion, score)| weights.get(&criterion).map(|w| (score, *w)))
            .fold((0.0, 0.0), |(total, sum), (score, weight)| {
                (total + score * weight, sum + weight)
            });

        if weight_sum <= 0.0 {
            return NEUTRAL_SCORE;
        }
        total / weight_sum
    }
}
