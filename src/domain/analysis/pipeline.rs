//! Evaluation pipeline: normalize → score → adjust → weight → rank → tradeoffs.

use tracing::debug;

use crate::domain::foundation::to_normalized;
use crate::domain::knowledge::{KnowledgeRegistry, OptionNormalizer};
use crate::domain::options::{TechnicalOption, UserConstraints};

use super::tradeoff_analyzer::DEFAULT_COMPROMISE_GAP;
use super::{
    ContextualAdjuster, EvaluationResult, OptionScore, Ranker, TradeoffAnalyzer, WeightingEngine,
};

/// Runs the scoring pipeline over already-validated input.
///
/// Holds no state between calls; the registry is borrowed for the
/// evaluator's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a KnowledgeRegistry,
    compromise_gap_threshold: f64,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a KnowledgeRegistry) -> Self {
        Self {
            registry,
            compromise_gap_threshold: DEFAULT_COMPROMISE_GAP,
        }
    }

    pub fn with_compromise_gap(mut self, threshold: f64) -> Self {
        self.compromise_gap_threshold = threshold;
        self
    }

    pub fn registry(&self) -> &'a KnowledgeRegistry {
        self.registry
    }

    /// Scores a single option. Returns the score and any warnings raised.
    pub fn score_option(
        &self,
        option: &TechnicalOption,
        constraints: &UserConstraints,
    ) -> (OptionScore, Vec<String>) {
        let normalized = OptionNormalizer::normalize(option, self.registry);
        let base = self.registry.base_scores(&normalized.option);

        let adjustments = ContextualAdjuster::adjustments_for(option, constraints);
        let criteria_scores = ContextualAdjuster::apply(&base.scores, &adjustments);
        let weighted_score = WeightingEngine::weighted_score(&criteria_scores, &constraints.priorities);

        debug!(
            option = %option.name,
            known = normalized.is_known(),
            weighted_score,
            "Scored option"
        );

        let mut warnings = normalized.warnings;
        warnings.extend(base.warnings);

        (
            OptionScore {
                option: option.clone(),
                criteria_scores,
                weighted_score,
                normalized_score: to_normalized(weighted_score),
            },
            warnings,
        )
    }

    /// Evaluates every option and assembles a fresh result.
    ///
    /// `warnings` carries any warnings already raised during validation.
    pub fn evaluate(
        &self,
        options: &[TechnicalOption],
        constraints: &UserConstraints,
        mut warnings: Vec<String>,
    ) -> EvaluationResult {
        let mut scores = Vec::with_capacity(options.len());
        for option in options {
            let (score, option_warnings) = self.score_option(option, constraints);
            warnings.extend(option_warnings);
            scores.push(score);
        }

        let rankings = Ranker::rank(&scores);
        let weights = WeightingEngine::criterion_weights(&constraints.priorities);
        let trade_offs = TradeoffAnalyzer::analyze(&scores, &weights, self.compromise_gap_threshold);

        EvaluationResult {
            scores,
            rankings,
            trade_offs,
            warnings,
        }
    }
}
