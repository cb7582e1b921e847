//! DecisionEngine - Entry point for evaluating and comparing options.
//!
//! Validates input, runs the scoring pipeline and, for comparisons, the
//! presentation layer. Holds the knowledge registry and engine config; both
//! are read-only after construction, so one engine can serve concurrent
//! callers through a shared reference.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::config::EngineConfig;
use crate::domain::analysis::{EvaluationResult, Evaluator};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::knowledge::KnowledgeRegistry;
use crate::domain::options::{InputValidator, TechnicalOption, UserConstraints};
use crate::domain::recommendation::{ComparisonOutput, Recommender};

/// Request to evaluate a set of options under one set of constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateOptionsCommand {
    pub options: Vec<TechnicalOption>,
    #[serde(default)]
    pub constraints: UserConstraints,
}

impl EvaluateOptionsCommand {
    pub fn new(options: Vec<TechnicalOption>, constraints: UserConstraints) -> Self {
        Self {
            options,
            constraints,
        }
    }
}

/// Evaluates and compares technical options.
#[derive(Debug)]
pub struct DecisionEngine {
    registry: KnowledgeRegistry,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Creates an engine over the given registry and config.
    pub fn new(registry: KnowledgeRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &KnowledgeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores, ranks and analyzes trade-offs.
    ///
    /// # Errors
    ///
    /// - `InvalidOptionCount` for fewer than 2 or more than 3 options
    /// - `InvalidOption` for a blank name or the same option listed twice
    /// - `InvalidPriority` for a priority outside 1-5
    pub fn evaluate(&self, command: &EvaluateOptionsCommand) -> Result<EvaluationResult, DomainError> {
        let span = info_span!("evaluate", options = command.options.len());
        let _entered = span.enter();

        let warnings = self.validate(command)?;
        let result = self
            .evaluator()
            .evaluate(&command.options, &command.constraints, warnings);

        info!(
            top = result.top().map(|r| r.option.name.as_str()).unwrap_or_default(),
            warnings = result.warnings.len(),
            "Evaluation complete"
        );
        Ok(result)
    }

    /// Evaluates, then builds the table, pros/cons, narrative, recommendation
    /// and alternative scenarios.
    ///
    /// # Errors
    ///
    /// Same as [`DecisionEngine::evaluate`].
    pub fn compare(&self, command: &EvaluateOptionsCommand) -> Result<ComparisonOutput, DomainError> {
        let result = self.evaluate(command)?;

        let span = info_span!("compare", options = command.options.len());
        let _entered = span.enter();

        Recommender::compare(
            &self.evaluator(),
            &command.options,
            &command.constraints,
            result,
            &self.config.policy(),
        )
        .ok_or_else(|| DomainError::new(ErrorCode::InvalidOptionCount, "No options were evaluated"))
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.registry).with_compromise_gap(self.config.compromise_gap_threshold)
    }

    fn validate(&self, command: &EvaluateOptionsCommand) -> Result<Vec<String>, DomainError> {
        InputValidator::validate(&command.options, &command.constraints).map_err(|error| {
            warn!(code = %error.code, message = %error.message, "Rejected evaluation request");
            error
        })
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(KnowledgeRegistry::standard(), EngineConfig::default())
    }
}
