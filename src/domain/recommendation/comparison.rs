//! Comparison rendering: score table, pros/cons and trade-off narrative.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::analysis::{EvaluationResult, OptionScore};
use crate::domain::foundation::Criterion;
use crate::domain::options::OptionKey;

use super::{AlternativeScenario, Recommendation, RecommendationPolicy};

/// Marker appended to the best value in each table row.
pub const BEST_MARKER: char = '*';

/// Strengths and weaknesses of a single option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsCons {
    pub option: OptionKey,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Everything a caller needs to present a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutput {
    pub evaluation: EvaluationResult,
    /// Markdown table, one column per option in input order.
    pub comparison_table: String,
    pub pros_cons: Vec<ProsCons>,
    pub trade_off_narrative: String,
    pub recommendation: Recommendation,
    pub alternative_scenarios: Vec<AlternativeScenario>,
}

pub struct ComparisonRenderer;

impl ComparisonRenderer {
    /// Criterion rows plus a weighted-score row; the best value per row is
    /// marked with `*` (all of them on a tie).
    pub fn table(result: &EvaluationResult) -> String {
        let mut table = String::new();
        if result.scores.is_empty() {
            return table;
        }

        table.push_str("| Criterion |");
        for score in &result.scores {
            table.push_str(&format!(" {} |", result.display_name(&score.option.key())));
        }
        table.push('\n');
        table.push_str("|---|");
        for _ in &result.scores {
            table.push_str("---|");
        }
        table.push('\n');

        for criterion in Criterion::ALL {
            let values: Vec<f64> = result
                .scores
                .iter()
                .map(|s| s.criteria_scores.get(criterion))
                .collect();
            Self::push_row(&mut table, criterion.label(), &values, 0);
        }

        let weighted: Vec<f64> = result.scores.iter().map(|s| s.weighted_score).collect();
        Self::push_row(&mut table, "Weighted score", &weighted, 1);

        table
    }

    fn push_row(table: &mut String, label: &str, values: &[f64], precision: usize) {
        let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        table.push_str(&format!("| {} |", label));
        for value in values {
            let marker = if *value == best { BEST_MARKER.to_string() } else { String::new() };
            table.push_str(&format!(" {:.*}{} |", precision, value, marker));
        }
        table.push('\n');
    }

    /// Pros and cons per option, in input order.
    ///
    /// Pros: criteria at or above the strength threshold, or where the option
    /// strictly leads. Cons: criteria at or below the weakness threshold, plus
    /// every compromise the option carries.
    pub fn pros_cons(result: &EvaluationResult, policy: &RecommendationPolicy) -> Vec<ProsCons> {
        result
            .scores
            .iter()
            .map(|score| {
                let key = score.option.key();
                let leads: BTreeSet<Criterion> = result
                    .trade_offs
                    .strengths_of(&key)
                    .into_iter()
                    .filter(|criterion| Self::strictly_leads(result, score, *criterion))
                    .collect();

                let pros = Criterion::ALL
                    .iter()
                    .copied()
                    .filter(|c| {
                        score.criteria_scores.get(*c) >= policy.strength_threshold || leads.contains(c)
                    })
                    .map(|c| format!("Strong {} ({:.0})", c.label().to_lowercase(), score.criteria_scores.get(c)))
                    .collect();

                let mut cons: Vec<String> = Criterion::ALL
                    .iter()
                    .copied()
                    .filter(|c| score.criteria_scores.get(*c) <= policy.weakness_threshold)
                    .map(|c| format!("Weak {} ({:.0})", c.label().to_lowercase(), score.criteria_scores.get(c)))
                    .collect();
                cons.extend(
                    result
                        .trade_offs
                        .compromises_for(&key)
                        .map(|c| c.description.clone()),
                );

                ProsCons {
                    option: key,
                    pros,
                    cons,
                }
            })
            .collect()
    }

    /// One line per option: what it optimizes for and what it gives up.
    pub fn narrative(result: &EvaluationResult, gap_threshold: f64) -> String {
        if result.trade_offs.compromises.is_empty() {
            return format!(
                "No option trails another by more than {:.0} points on any criterion, so the choice hinges on overall fit.",
                gap_threshold
            );
        }

        result
            .scores
            .iter()
            .map(|score| {
                let key = score.option.key();
                let name = result.display_name(&key);
                let strengths: Vec<String> = result
                    .trade_offs
                    .strengths_of(&key)
                    .into_iter()
                    .filter(|c| Self::strictly_leads(result, score, *c))
                    .map(|c| c.label().to_lowercase())
                    .collect();
                let sacrifices: BTreeSet<Criterion> = result
                    .trade_offs
                    .compromises_for(&key)
                    .flat_map(|c| c.affected_criteria.iter().copied())
                    .collect();
                let sacrifices: Vec<String> = sacrifices.into_iter().map(|c| c.label().to_lowercase()).collect();

                match (strengths.is_empty(), sacrifices.is_empty()) {
                    (false, false) => format!(
                        "{} optimizes for {} and sacrifices {}.",
                        name,
                        strengths.join(", "),
                        sacrifices.join(", ")
                    ),
                    (false, true) => format!(
                        "{} optimizes for {} without a significant sacrifice.",
                        name,
                        strengths.join(", ")
                    ),
                    (true, false) => format!(
                        "{} leads on nothing outright and sacrifices {}.",
                        name,
                        sacrifices.join(", ")
                    ),
                    (true, true) => format!("{} sits between the alternatives on every criterion.", name),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Leads on `criterion` and beats at least one other option there.
    fn strictly_leads(result: &EvaluationResult, score: &OptionScore, criterion: Criterion) -> bool {
        let own = score.criteria_scores.get(criterion);
        result
            .scores
            .iter()
            .any(|other| other.criteria_scores.get(criterion) < own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Evaluator;
    use crate::domain::knowledge::KnowledgeRegistry;
    use crate::domain::options::{Category, TechnicalOption, UserConstraints};

    fn database_result() -> EvaluationResult {
        let registry = KnowledgeRegistry::standard();
        let options = vec![
            TechnicalOption::new("PostgreSQL", Category::Database),
            TechnicalOption::new("MongoDB", Category::Database),
        ];
        Evaluator::new(&registry).evaluate(&options, &UserConstraints::default(), vec![])
    }

    #[test]
    fn table_has_header_criteria_and_weighted_rows() {
        let table = ComparisonRenderer::table(&database_result());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "| Criterion | PostgreSQL | MongoDB |");
        assert_eq!(lines.len(), 2 + Criterion::ALL.len() + 1);
        assert!(lines.last().unwrap().starts_with("| Weighted score |"));
        // Scalability: MongoDB 85 beats PostgreSQL 55.
        assert!(table.contains("| Scalability | 55 | 85* |"));
        // Cost ties at 75 and both are marked.
        assert!(table.contains("| Cost | 75* | 75* |"));
    }

    #[test]
    fn empty_result_renders_empty_table() {
        let result = EvaluationResult {
            scores: vec![],
            rankings: vec![],
            trade_offs: Default::default(),
            warnings: vec![],
        };
        assert!(ComparisonRenderer::table(&result).is_empty());
    }

    #[test]
    fn pros_cons_follow_thresholds_and_compromises() {
        let result = database_result();
        let pros_cons = ComparisonRenderer::pros_cons(&result, &RecommendationPolicy::default());

        let postgres = &pros_cons[0];
        assert_eq!(postgres.option.name, "PostgreSQL");
        assert!(postgres.pros.iter().any(|p| p.starts_with("Strong maintainability")));
        assert!(postgres.cons.iter().any(|c| c.contains("trails MongoDB on scalability")));

        let mongo = &pros_cons[1];
        assert!(mongo.pros.iter().any(|p| p.starts_with("Strong scalability")));
        // Gaps of exactly 20 are not compromises.
        assert!(mongo.cons.is_empty());
    }

    #[test]
    fn narrative_mentions_each_option() {
        let result = database_result();
        let narrative = ComparisonRenderer::narrative(&result, 20.0);

        assert!(narrative.contains("PostgreSQL optimizes for vendor lock-in, maintainability and sacrifices scalability."));
        assert!(narrative.contains("MongoDB optimizes for scalability without a significant sacrifice."));
        assert_eq!(narrative.lines().count(), 2);
    }

    #[test]
    fn narrative_without_compromises() {
        let registry = KnowledgeRegistry::standard();
        let options = vec![
            TechnicalOption::new("Alpha", Category::Unknown),
            TechnicalOption::new("Beta", Category::Unknown),
        ];
        let result = Evaluator::new(&registry).evaluate(&options, &UserConstraints::default(), vec![]);
        let narrative = ComparisonRenderer::narrative(&result, 20.0);
        assert!(narrative.starts_with("No option trails another by more than 20 points"));
    }

    #[test]
    fn shared_names_are_qualified_and_kept_apart() {
        let registry = KnowledgeRegistry::standard();
        let options = vec![
            TechnicalOption::new("Redis", Category::Unknown),
            TechnicalOption::new("Redis", Category::Database),
        ];
        let result = Evaluator::new(&registry).evaluate(&options, &UserConstraints::default(), vec![]);

        let table = ComparisonRenderer::table(&result);
        assert!(table.starts_with("| Criterion | Redis (unknown) | Redis (database) |"));

        let pros_cons = ComparisonRenderer::pros_cons(&result, &RecommendationPolicy::default());
        let store = &pros_cons[1];
        assert_eq!(store.option, OptionKey::new("Redis", Category::Database));
        assert!(store.pros.iter().any(|p| p.starts_with("Strong performance")));
        assert!(store.cons.iter().all(|c| !c.contains("trails")));
        assert!(pros_cons[0]
            .cons
            .iter()
            .any(|c| c.starts_with("Redis (unknown) trails Redis (database) on performance")));

        let narrative = ComparisonRenderer::narrative(&result, 20.0);
        assert!(narrative.contains("Redis (database) optimizes for"));
    }
}
