//! Knowledge Registry - Category-keyed tables of scoring functions and rules.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::foundation::{
    clamp_score, Criterion, CriterionScores, ScoringError, NEUTRAL_SCORE,
};
use crate::domain::options::{Attributes, Category, TechnicalOption};

use super::{backend, cloud, database, fallback};

/// Computes a raw score for one criterion from an option's attributes.
pub type ScoringFn = fn(&Attributes) -> Result<f64, ScoringError>;

/// Decides whether a scoring rule applies to an option.
pub type RulePredicate = fn(&Attributes) -> Result<bool, ScoringError>;

/// One row of a category's criteria table.
#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub criterion: Criterion,
    pub score: ScoringFn,
}

impl CriterionDef {
    pub const fn new(criterion: Criterion, score: ScoringFn) -> Self {
        Self { criterion, score }
    }
}

/// A conditional, fixed-delta adjustment applied after base scoring.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub applies: RulePredicate,
    pub adjustment: f64,
    pub affected: &'static [Criterion],
}

/// A technology the registry has first-hand attributes for.
#[derive(Debug, Clone)]
pub struct KnownTechnology {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub attributes: Attributes,
}

impl KnownTechnology {
    /// Case-insensitive match on name or alias.
    pub fn matches(&self, lookup_name: &str) -> bool {
        self.name.eq_ignore_ascii_case(lookup_name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(lookup_name))
    }
}

/// Everything the registry knows about one category.
#[derive(Debug, Clone, Default)]
pub struct CategoryProfile {
    pub criteria: Vec<CriterionDef>,
    pub rules: Vec<ScoringRule>,
    /// Substituted under unknown technologies' own attributes.
    pub defaults: Attributes,
    /// Attributes an unknown technology should declare.
    pub required_fields: &'static [&'static str],
    pub known: Vec<KnownTechnology>,
}

impl CategoryProfile {
    pub fn find_known(&self, lookup_name: &str) -> Option<&KnownTechnology> {
        self.known.iter().find(|k| k.matches(lookup_name))
    }
}

/// Base scores for one option plus any recovered scoring failures.
#[derive(Debug, Clone)]
pub struct BaseScores {
    pub scores: CriterionScores,
    pub warnings: Vec<String>,
}

/// Category-keyed registry of domain knowledge.
///
/// Categories without a profile fall back to a neutral table that scores
/// every criterion at 50, so scoring never fails for an unfamiliar category.
#[derive(Debug, Clone)]
pub struct KnowledgeRegistry {
    profiles: HashMap<Category, CategoryProfile>,
    fallback: CategoryProfile,
}

impl KnowledgeRegistry {
    /// Creates an empty registry with the given fallback profile.
    pub fn new(fallback: CategoryProfile) -> Self {
        Self {
            profiles: HashMap::new(),
            fallback,
        }
    }

    /// The built-in cloud, backend and database knowledge.
    pub fn standard() -> Self {
        Self::new(fallback::profile())
            .with_profile(Category::Cloud, cloud::profile())
            .with_profile(Category::Backend, backend::profile())
            .with_profile(Category::Database, database::profile())
    }

    /// Registers (or replaces) a category profile.
    pub fn with_profile(mut self, category: Category, profile: CategoryProfile) -> Self {
        self.profiles.insert(category, profile);
        self
    }

    pub fn has_profile(&self, category: Category) -> bool {
        self.profiles.contains_key(&category)
    }

    pub fn profile_for(&self, category: Category) -> &CategoryProfile {
        self.profiles.get(&category).unwrap_or(&self.fallback)
    }

    /// Ordered criterion scoring functions for a category.
    pub fn criteria_for(&self, category: Category) -> &[CriterionDef] {
        &self.profile_for(category).criteria
    }

    /// Conditional adjustment rules for a category.
    pub fn scoring_rules_for(&self, category: Category) -> &[ScoringRule] {
        &self.profile_for(category).rules
    }

    /// Scores every standard criterion for an already-normalized option.
    ///
    /// Each scoring function is clamped on its own. A function that fails is
    /// recorded as a warning and contributes the neutral score. Rules are
    /// applied afterwards, then any criterion the table did not cover is
    /// filled with the neutral score.
    pub fn base_scores(&self, option: &TechnicalOption) -> BaseScores {
        let mut scores = CriterionScores::new();
        let mut warnings = Vec::new();

        for def in self.criteria_for(option.category) {
            let value = match (def.score)(&option.attributes) {
                Ok(raw) => clamp_score(raw),
                Err(err) => {
                    warn!(
                        option = %option.name,
                        criterion = %def.criterion,
                        error = %err,
                        "Scoring function failed, using neutral score"
                    );
                    warnings.push(format!(
                        "Could not score {} for '{}' ({}); used neutral score",
                        def.criterion.label().to_lowercase(),
                        option.name,
                        err
                    ));
                    NEUTRAL_SCORE
                }
            };
            scores.set(def.criterion, value);
        }

        warnings.extend(self.apply_score_adjustments(option, &mut scores));

        BaseScores {
            scores: scores.complete(),
            warnings,
        }
    }

    /// Applies the category's rules in order. Returns warnings for rules whose
    /// predicate failed; those rules are skipped.
    pub fn apply_score_adjustments(
        &self,
        option: &TechnicalOption,
        scores: &mut CriterionScores,
    ) -> Vec<String> {
        let mut warnings = Vec::new();

        for rule in self.scoring_rules_for(option.category) {
            match (rule.applies)(&option.attributes) {
                Ok(true) => {
                    for criterion in rule.affected {
                        scores.adjust(*criterion, rule.adjustment);
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        option = %option.name,
                        rule = rule.name,
                        error = %err,
                        "Scoring rule predicate failed, rule skipped"
                    );
                    warnings.push(format!(
                        "Rule '{}' skipped for '{}' ({})",
                        rule.name, option.name, err
                    ));
                }
            }
        }

        warnings
    }
}

impl Default for KnowledgeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bonus for a declared learning-curve tier.
pub(super) fn learning_tier_bonus(attrs: &Attributes) -> Result<f64, ScoringError> {
    Ok(match attrs.text("learningCurve")?.map(|t| t.trim().to_lowercase()) {
        Some(tier) if tier == "easy" => 25.0,
        Some(tier) if tier == "moderate" => 10.0,
        Some(tier) if tier == "steep" => -15.0,
        _ => 0.0,
    })
}

/// Bonus keyed on a size tier (`large` / `medium`).
pub(super) fn size_bonus(
    attrs: &Attributes,
    key: &str,
    large: f64,
    medium: f64,
) -> Result<f64, ScoringError> {
    Ok(if attrs.text_is(key, "large")? {
        large
    } else if attrs.text_is(key, "medium")? {
        medium
    } else {
        0.0
    })
}
