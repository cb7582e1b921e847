//! Recommender - Turns an evaluation into a recommendation and full comparison.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::analysis::{
    EvaluationResult, Evaluator, Impact, OptionScore, WeightingEngine, DEFAULT_COMPROMISE_GAP,
};
use crate::domain::foundation::Criterion;
use crate::domain::options::{OptionKey, TechnicalOption, UserConstraints};

use super::comparison::{ComparisonOutput, ComparisonRenderer};
use super::confidence::{ConfidenceBreakdown, ConfidenceEstimator};
use super::scenarios::{ScenarioGenerator, DEFAULT_MAX_SCENARIOS};

/// Number of key factors reported for the top option.
pub const KEY_FACTOR_COUNT: usize = 3;

/// Thresholds that shape the presentation of a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPolicy {
    /// Scores at or above this are listed as pros.
    pub strength_threshold: f64,
    /// Scores at or below this are listed as cons.
    pub weakness_threshold: f64,
    /// Below this confidence the recommendation carries a close-call warning.
    pub low_confidence_threshold: f64,
    pub max_scenarios: usize,
    pub compromise_gap_threshold: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            strength_threshold: 70.0,
            weakness_threshold: 40.0,
            low_confidence_threshold: 0.6,
            max_scenarios: DEFAULT_MAX_SCENARIOS,
            compromise_gap_threshold: DEFAULT_COMPROMISE_GAP,
        }
    }
}

/// The final pick with its justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub option: OptionKey,
    /// 0.1-1.0.
    pub confidence: f64,
    pub confidence_breakdown: ConfidenceBreakdown,
    pub reasoning: String,
    /// Criteria contributing most to the top option's weighted score.
    pub key_factors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct Recommender;

impl Recommender {
    /// Builds the recommendation for the rank-1 option.
    ///
    /// Returns `None` for an empty result.
    pub fn recommend(
        result: &EvaluationResult,
        constraints: &UserConstraints,
        policy: &RecommendationPolicy,
    ) -> Option<Recommendation> {
        let ranked = result.scores_by_rank();
        let top = *ranked.first()?;
        let confidence = ConfidenceEstimator::estimate(&ranked, &constraints.priorities);
        let top_key = top.option.key();

        let mut warnings = result.warnings.clone();
        if confidence.value < policy.low_confidence_threshold {
            warnings.push(format!(
                "Close call: confidence is only {:.0}%, so re-check the priorities before committing",
                confidence.value * 100.0
            ));
        }
        warnings.extend(
            result
                .trade_offs
                .compromises_for(&top_key)
                .filter(|c| c.impact == Impact::High)
                .map(|c| format!("High-impact trade-off: {}", c.description)),
        );

        debug!(
            option = %top_key,
            confidence = confidence.value,
            "Built recommendation"
        );

        Some(Recommendation {
            option: top_key,
            confidence: confidence.value,
            confidence_breakdown: confidence,
            reasoning: Self::reasoning(result, &ranked, confidence.value),
            key_factors: Self::key_factors(top, constraints),
            warnings,
        })
    }

    /// Runs the whole presentation layer on top of one evaluation.
    pub fn compare(
        evaluator: &Evaluator<'_>,
        options: &[TechnicalOption],
        constraints: &UserConstraints,
        result: EvaluationResult,
        policy: &RecommendationPolicy,
    ) -> Option<ComparisonOutput> {
        let recommendation = Self::recommend(&result, constraints, policy)?;
        let alternative_scenarios =
            ScenarioGenerator::generate(evaluator, options, constraints, &result, policy.max_scenarios);

        info!(
            option = %recommendation.option,
            confidence = recommendation.confidence,
            scenarios = alternative_scenarios.len(),
            "Comparison complete"
        );

        Some(ComparisonOutput {
            comparison_table: ComparisonRenderer::table(&result),
            pros_cons: ComparisonRenderer::pros_cons(&result, policy),
            trade_off_narrative: ComparisonRenderer::narrative(&result, policy.compromise_gap_threshold),
            recommendation,
            alternative_scenarios,
            evaluation: result,
        })
    }

    /// Top criteria by score × emphasized weight.
    pub fn key_factors(top: &OptionScore, constraints: &UserConstraints) -> Vec<String> {
        let weights = WeightingEngine::criterion_weights(&constraints.priorities);
        let mut contributions: Vec<(Criterion, f64, f64)> = Criterion::ALL
            .iter()
            .map(|criterion| {
                let weight = weights.get(criterion).copied().unwrap_or(0.0);
                let score = top.criteria_scores.get(*criterion);
                (*criterion, score, weight)
            })
            .filter(|(_, _, weight)| *weight > 0.0)
            .collect();
        contributions.sort_by(|a, b| (b.1 * b.2).total_cmp(&(a.1 * a.2)));

        contributions
            .into_iter()
            .take(KEY_FACTOR_COUNT)
            .map(|(criterion, score, weight)| {
                format!("{}: {:.0} (weight {:.0}%)", criterion.label(), score, weight * 100.0)
            })
            .collect()
    }

    fn reasoning(result: &EvaluationResult, ranked: &[&OptionScore], confidence: f64) -> String {
        let Some(top) = ranked.first() else {
            return String::new();
        };
        let key = top.option.key();
        let name = result.display_name(&key);

        let mut text = match ranked.get(1) {
            Some(second) => format!(
                "{} ranks first with a weighted score of {:.1}, {:.1} points ahead of {}.",
                name,
                top.weighted_score,
                top.weighted_score - second.weighted_score,
                result.display_name(&second.option.key())
            ),
            None => format!("{} is the only option, with a weighted score of {:.1}.", name, top.weighted_score),
        };

        let strengths: Vec<String> = result
            .trade_offs
            .strengths_of(&key)
            .into_iter()
            .filter(|criterion| {
                ranked
                    .iter()
                    .any(|other| other.criteria_scores.get(*criterion) < top.criteria_scores.get(*criterion))
            })
            .map(|criterion| criterion.label().to_lowercase())
            .collect();
        if strengths.is_empty() {
            text.push_str(" It has no single standout criterion but holds up across the board.");
        } else {
            text.push_str(&format!(" It leads on {}.", strengths.join(", ")));
        }

        let level = if confidence >= 0.8 {
            "high"
        } else if confidence >= 0.6 {
            "moderate"
        } else {
            "low"
        };
        text.push_str(&format!(" Confidence is {} ({:.0}%).", level, confidence * 100.0));
        text
    }
}
