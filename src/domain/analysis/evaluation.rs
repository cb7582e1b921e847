//! Evaluation result types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{Criterion, CriterionScores};
use crate::domain::options::{OptionKey, TechnicalOption};

/// Scores for one option from one evaluation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionScore {
    pub option: TechnicalOption,
    pub criteria_scores: CriterionScores,
    pub weighted_score: f64,
    pub normalized_score: u8,
}

/// Position of an option in the final ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOption {
    pub option: TechnicalOption,
    /// Dense, 1-based.
    pub rank: usize,
    pub score: f64,
}

/// Severity of a compromise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A significant weakness of one option against the best alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compromise {
    /// The option that trails.
    pub option: OptionKey,
    pub description: String,
    pub impact: Impact,
    pub affected_criteria: Vec<Criterion>,
    /// Points behind the best other option.
    pub gap: f64,
}

/// Best and worst option per criterion plus detected compromises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOffAnalysis {
    pub strongest_option: BTreeMap<Criterion, OptionKey>,
    pub weakest_option: BTreeMap<Criterion, OptionKey>,
    pub compromises: Vec<Compromise>,
}

impl TradeOffAnalysis {
    /// Compromises affecting one option.
    pub fn compromises_for<'a>(&'a self, option: &'a OptionKey) -> impl Iterator<Item = &'a Compromise> + 'a {
        self.compromises.iter().filter(move |c| &c.option == option)
    }

    /// Criteria on which an option is the strongest.
    pub fn strengths_of(&self, option: &OptionKey) -> Vec<Criterion> {
        self.strongest_option
            .iter()
            .filter(|(_, leader)| *leader == option)
            .map(|(criterion, _)| *criterion)
            .collect()
    }
}

/// Complete output of one evaluation. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// In input order.
    pub scores: Vec<OptionScore>,
    /// Best first.
    pub rankings: Vec<RankedOption>,
    pub trade_offs: TradeOffAnalysis,
    /// Non-fatal problems found while evaluating.
    pub warnings: Vec<String>,
}

impl EvaluationResult {
    /// The rank-1 option, if any.
    pub fn top(&self) -> Option<&RankedOption> {
        self.rankings.first()
    }

    /// Scores for an option by name. With a name shared across categories
    /// this is the first match; use [`EvaluationResult::score_of`] instead.
    pub fn score_for(&self, option_name: &str) -> Option<&OptionScore> {
        self.scores.iter().find(|s| s.option.name == option_name)
    }

    /// Scores for exactly one option.
    pub fn score_of(&self, option: &OptionKey) -> Option<&OptionScore> {
        self.scores.iter().find(|s| s.option.is(option))
    }

    /// How `option` should be named in generated text.
    pub fn display_name(&self, option: &OptionKey) -> String {
        option.display_among(self.scores.iter().map(|s| &s.option))
    }

    /// Option scores ordered by rank.
    pub fn scores_by_rank(&self) -> Vec<&OptionScore> {
        self.rankings
            .iter()
            .filter_map(|ranked| self.scores.iter().find(|s| s.option == ranked.option))
            .collect()
    }
}
