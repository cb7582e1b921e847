//! Criterion scores (0-100 scale).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Criterion;

/// Lowest possible criterion score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible criterion score.
pub const MAX_SCORE: f64 = 100.0;

/// Score used whenever nothing better is known.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Clamps a raw score into [0, 100]. NaN collapses to neutral.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return NEUTRAL_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Rounds a score to the 0-100 integer scale.
pub fn to_normalized(value: f64) -> u8 {
    clamp_score(value).round() as u8
}

/// Per-criterion scores for one option. Every write is clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionScores(BTreeMap<Criterion, f64>);

impl CriterionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// All six criteria at the same score.
    pub fn uniform(score: f64) -> Self {
        Criterion::ALL.into_iter().map(|c| (c, score)).collect()
    }

    /// Score for a criterion; missing entries read as neutral.
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0.get(&criterion).copied().unwrap_or(NEUTRAL_SCORE)
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        self.0.contains_key(&criterion)
    }

    pub fn set(&mut self, criterion: Criterion, score: f64) {
        self.0.insert(criterion, clamp_score(score));
    }

    /// Adds a signed delta, clamping the result.
    pub fn adjust(&mut self, criterion: Criterion, delta: f64) {
        let current = self.get(criterion);
        self.set(criterion, current + delta);
    }

    /// Fills every absent standard criterion with the neutral score.
    pub fn complete(mut self) -> Self {
        for criterion in Criterion::ALL {
            self.0.entry(criterion).or_insert(NEUTRAL_SCORE);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }

    pub fn criteria(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean of the stored scores.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return NEUTRAL_SCORE;
        }
        self.0.values().sum::<f64>() / self.0.len() as f64
    }

    /// Population standard deviation of the stored scores.
    pub fn std_dev(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .0
            .values()
            .map(|s| (s - mean).powi(2))
            .sum::<f64>()
            / self.0.len() as f64;
        variance.sqrt()
    }
}

impl FromIterator<(Criterion, f64)> for CriterionScores {
    fn from_iter<I: IntoIterator<Item = (Criterion, f64)>>(iter: I) -> Self {
        let mut scores = CriterionScores::new();
        for (criterion, score) in iter {
            scores.set(criterion, score);
        }
        scores
    }
}
