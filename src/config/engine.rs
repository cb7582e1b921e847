//! Engine configuration

use serde::Deserialize;

use crate::domain::analysis::DEFAULT_COMPROMISE_GAP;
use crate::domain::foundation::{MAX_SCORE, MIN_SCORE};
use crate::domain::recommendation::{
    RecommendationPolicy, DEFAULT_MAX_SCENARIOS, MAX_CONFIDENCE, MIN_CONFIDENCE,
};

use super::error::ValidationError;

/// Tunables for evaluation and presentation
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Points an option must trail by before it counts as a compromise
    #[serde(default = "default_compromise_gap")]
    pub compromise_gap_threshold: f64,

    /// Cap on alternative scenarios per comparison
    #[serde(default = "default_max_scenarios")]
    pub max_scenarios: usize,

    /// Confidence below which a close-call warning is attached
    #[serde(default = "default_low_confidence")]
    pub low_confidence_threshold: f64,

    /// Scores at or above this are reported as pros
    #[serde(default = "default_strength_threshold")]
    pub strength_threshold: f64,

    /// Scores at or below this are reported as cons
    #[serde(default = "default_weakness_threshold")]
    pub weakness_threshold: f64,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let gap = self.compromise_gap_threshold;
        if !(gap > 0.0 && gap <= MAX_SCORE) {
            return Err(ValidationError::InvalidCompromiseGap(gap));
        }
        if self.max_scenarios == 0 {
            return Err(ValidationError::InvalidMaxScenarios);
        }
        let confidence = self.low_confidence_threshold;
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence) {
            return Err(ValidationError::InvalidConfidenceThreshold(confidence));
        }
        for (name, value) in [
            ("strength_threshold", self.strength_threshold),
            ("weakness_threshold", self.weakness_threshold),
        ] {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(ValidationError::InvalidScoreThreshold { name, value });
            }
        }
        if self.weakness_threshold >= self.strength_threshold {
            return Err(ValidationError::ThresholdsOverlap {
                strength: self.strength_threshold,
                weakness: self.weakness_threshold,
            });
        }
        Ok(())
    }

    /// Presentation thresholds handed to the recommender
    pub fn policy(&self) -> RecommendationPolicy {
        RecommendationPolicy {
            strength_threshold: self.strength_threshold,
            weakness_threshold: self.weakness_threshold,
            low_confidence_threshold: self.low_confidence_threshold,
            max_scenarios: self.max_scenarios,
            compromise_gap_threshold: self.compromise_gap_threshold,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            compromise_gap_threshold: default_compromise_gap(),
            max_scenarios: default_max_scenarios(),
            low_confidence_threshold: default_low_confidence(),
            strength_threshold: default_strength_threshold(),
            weakness_threshold: default_weakness_threshold(),
        }
    }
}

fn default_compromise_gap() -> f64 {
    DEFAULT_COMPROMISE_GAP
}

fn default_max_scenarios() -> usize {
    DEFAULT_MAX_SCENARIOS
}

fn default_low_confidence() -> f64 {
    0.6
}

fn default_strength_threshold() -> f64 {
    70.0
}

fn default_weakness_threshold() -> f64 {
    40.0
}
