//! Scenario Generator - "What would change the answer?"
//!
//! Priority scenarios are read off the existing scores. Context and scale
//! scenarios re-run the pipeline under a single flipped constraint and are
//! reported only when the top pick changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::domain::analysis::{criterion_for, EvaluationResult, Evaluator, OptionScore};
use crate::domain::foundation::{Criterion, PriorityKey};
use crate::domain::options::{
    Budget, OptionKey, SkillLevel, TechnicalOption, Timeline, Traffic, UserConstraints,
};

/// Default cap on generated scenarios.
pub const DEFAULT_MAX_SCENARIOS: usize = 4;

/// What kind of change a scenario describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Priority,
    Context,
    Scale,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioKind::Priority => "priority",
            ScenarioKind::Context => "context",
            ScenarioKind::Scale => "scale",
        };
        write!(f, "{}", label)
    }
}

/// A condition under which a different option would be recommended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeScenario {
    pub kind: ScenarioKind,
    pub condition: String,
    pub recommended_option: OptionKey,
    pub reasoning: String,
}

pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// Priority scenarios first, then context, then scale, capped at `max`.
    pub fn generate(
        evaluator: &Evaluator<'_>,
        options: &[TechnicalOption],
        constraints: &UserConstraints,
        result: &EvaluationResult,
        max: usize,
    ) -> Vec<AlternativeScenario> {
        let Some(top) = result.top() else {
            return Vec::new();
        };
        let top_key = top.option.key();

        let mut scenarios = Self::priority_scenarios(result, constraints);
        if scenarios.len() < max {
            scenarios.extend(Self::context_scenarios(evaluator, options, constraints, &top_key));
        }
        if scenarios.len() < max {
            scenarios.extend(Self::scale_scenario(evaluator, options, constraints, &top_key));
        }
        scenarios.truncate(max);

        debug!(count = scenarios.len(), top = %top_key, "Generated alternative scenarios");
        scenarios
    }

    /// For each non-dominant priority, the option scoring best on the mapped
    /// criterion if that is not the current top pick. Largest advantage first.
    pub fn priority_scenarios(
        result: &EvaluationResult,
        constraints: &UserConstraints,
    ) -> Vec<AlternativeScenario> {
        let Some(top) = result.top() else {
            return Vec::new();
        };
        let top_key = top.option.key();
        let Some(top_score) = result.score_of(&top_key) else {
            return Vec::new();
        };
        let top_name = result.display_name(&top_key);
        let dominant = constraints.priorities.dominant();

        let mut candidates: Vec<(f64, AlternativeScenario)> = Vec::new();
        for key in PriorityKey::ALL {
            if dominant.contains(&key) {
                continue;
            }
            let criterion = criterion_for(key);

            // First option in input order wins ties.
            let best = result.scores.iter().fold(None, |best, candidate| match best {
                Some(current) if Self::value_on(current, criterion) >= Self::value_on(candidate, criterion) => {
                    Some(current)
                }
                _ => Some(candidate),
            });
            let Some(best) = best else {
                continue;
            };
            if best.option.is(&top_key) {
                continue;
            }
            let best_key = best.option.key();
            let best_name = result.display_name(&best_key);

            let best_value = best.criteria_scores.get(criterion);
            let top_value = top_score.criteria_scores.get(criterion);
            candidates.push((
                best_value - top_value,
                AlternativeScenario {
                    kind: ScenarioKind::Priority,
                    condition: format!("If {} becomes your top priority", key.label().to_lowercase()),
                    recommended_option: best_key,
                    reasoning: format!(
                        "{} scores {:.0} on {} versus {:.0} for {}",
                        best_name,
                        best_value,
                        criterion.label().to_lowercase(),
                        top_value,
                        top_name
                    ),
                },
            ));
        }

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        candidates.into_iter().map(|(_, scenario)| scenario).collect()
    }

    /// Budget, timeline and skill-level flips, in that order.
    pub fn context_scenarios(
        evaluator: &Evaluator<'_>,
        options: &[TechnicalOption],
        constraints: &UserConstraints,
        current_top: &OptionKey,
    ) -> Vec<AlternativeScenario> {
        let (budget, budget_condition) = match constraints.budget {
            Budget::Low => (Budget::High, "If your budget increases"),
            _ => (Budget::Low, "If your budget becomes tight"),
        };
        let (timeline, timeline_condition) = match constraints.timeline {
            Timeline::Immediate => (Timeline::Long, "If you can plan for the long term"),
            _ => (Timeline::Immediate, "If you need to ship immediately"),
        };
        let (skill, skill_condition) = match constraints.team.skill_level {
            SkillLevel::Junior => (SkillLevel::Senior, "If your team gains senior expertise"),
            _ => (SkillLevel::Junior, "If the team is mostly junior"),
        };

        let flips = [
            (constraints.clone().with_budget(budget), budget_condition),
            (constraints.clone().with_timeline(timeline), timeline_condition),
            (constraints.clone().with_skill_level(skill), skill_condition),
        ];

        flips
            .into_iter()
            .filter_map(|(flipped, condition)| {
                Self::rerun(evaluator, options, &flipped, current_top, ScenarioKind::Context, condition)
            })
            .collect()
    }

    /// Large scale flips to modest load; anything else flips to high load.
    pub fn scale_scenario(
        evaluator: &Evaluator<'_>,
        options: &[TechnicalOption],
        constraints: &UserConstraints,
        current_top: &OptionKey,
    ) -> Option<AlternativeScenario> {
        let (flipped, condition) = if constraints.scale.is_large() {
            (
                constraints.clone().with_scale(1_000, Traffic::Low),
                "If you expect modest scale",
            )
        } else {
            (
                constraints.clone().with_scale(1_000_000, Traffic::High),
                "If you need to handle high scale",
            )
        };
        Self::rerun(evaluator, options, &flipped, current_top, ScenarioKind::Scale, condition)
    }

    fn rerun(
        evaluator: &Evaluator<'_>,
        options: &[TechnicalOption],
        flipped: &UserConstraints,
        current_top: &OptionKey,
        kind: ScenarioKind,
        condition: &str,
    ) -> Option<AlternativeScenario> {
        let result = evaluator.evaluate(options, flipped, Vec::new());
        let alternative = result.top()?;
        if alternative.option.is(current_top) {
            return None;
        }
        let previous = result.score_of(current_top).map(|s| s.weighted_score)?;
        let alternative_key = alternative.option.key();

        Some(AlternativeScenario {
            kind,
            condition: condition.to_string(),
            reasoning: format!(
                "{} would score {:.1} against {:.1} for {}",
                result.display_name(&alternative_key),
                alternative.score,
                previous,
                result.display_name(current_top)
            ),
            recommended_option: alternative_key,
        })
    }

    fn value_on(score: &OptionScore, criterion: Criterion) -> f64 {
        score.criteria_scores.get(criterion)
    }
}
