//! Contextual Adjuster - Situational score deltas.
//!
//! Deltas are fixed constants that stack additively; only the final
//! per-criterion score is clamped.

use std::collections::BTreeMap;

use crate::domain::foundation::{Criterion, CriterionScores};
use crate::domain::options::{Budget, SkillLevel, TechnicalOption, Timeline, UserConstraints};

pub const LOW_BUDGET_COST_BONUS: f64 = 10.0;
pub const HIGH_BUDGET_PERFORMANCE_BONUS: f64 = 5.0;
pub const IMMEDIATE_TIMELINE_LEARNING_BONUS: f64 = 15.0;
pub const LONG_TIMELINE_SCALABILITY_BONUS: f64 = 10.0;
pub const JUNIOR_LEARNING_BONUS: f64 = 10.0;
pub const JUNIOR_MAINTAINABILITY_BONUS: f64 = 5.0;
pub const SENIOR_PERFORMANCE_BONUS: f64 = 5.0;
pub const EXPERIENCE_LEARNING_BONUS: f64 = 20.0;
pub const EXPERIENCE_MAINTAINABILITY_BONUS: f64 = 10.0;
pub const LARGE_SCALE_SCALABILITY_BONUS: f64 = 15.0;
pub const LARGE_SCALE_PERFORMANCE_BONUS: f64 = 10.0;

/// Summed delta per criterion.
pub type Adjustments = BTreeMap<Criterion, f64>;

/// Situational adjustments independent of the option's category.
pub struct ContextualAdjuster;

impl ContextualAdjuster {
    /// Sums every applicable delta for this option under these constraints.
    pub fn adjustments_for(option: &TechnicalOption, constraints: &UserConstraints) -> Adjustments {
        let mut deltas = Adjustments::new();
        let mut add = |criterion: Criterion, delta: f64| {
            *deltas.entry(criterion).or_insert(0.0) += delta;
        };

        match constraints.budget {
            Budget::Low => add(Criterion::Cost, LOW_BUDGET_COST_BONUS),
            Budget::High => add(Criterion::Performance, HIGH_BUDGET_PERFORMANCE_BONUS),
            Budget::Medium => {}
        }

        match constraints.timeline {
            Timeline::Immediate => add(Criterion::LearningCurve, IMMEDIATE_TIMELINE_LEARNING_BONUS),
            Timeline::Long => add(Criterion::Scalability, LONG_TIMELINE_SCALABILITY_BONUS),
            Timeline::Short | Timeline::Medium => {}
        }

        match constraints.team.skill_level {
            SkillLevel::Junior => {
                add(Criterion::LearningCurve, JUNIOR_LEARNING_BONUS);
                add(Criterion::Maintainability, JUNIOR_MAINTAINABILITY_BONUS);
            }
            SkillLevel::Senior => add(Criterion::Performance, SENIOR_PERFORMANCE_BONUS),
            SkillLevel::Intermediate => {}
        }

        if constraints.team.has_experience_with(&option.name) {
            add(Criterion::LearningCurve, EXPERIENCE_LEARNING_BONUS);
            add(Criterion::Maintainability, EXPERIENCE_MAINTAINABILITY_BONUS);
        }

        if constraints.scale.is_large() {
            add(Criterion::Scalability, LARGE_SCALE_SCALABILITY_BONUS);
            add(Criterion::Performance, LARGE_SCALE_PERFORMANCE_BONUS);
        }

        deltas
    }

    /// Returns a copy of `scores` with the deltas applied and clamped.
    pub fn apply(scores: &CriterionScores, adjustments: &Adjustments) -> CriterionScores {
        let mut adjusted = scores.clone();
        for (criterion, delta) in adjustments {
            adjusted.adjust(*criterion, *delta);
        }
        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{Category, Traffic};

    fn option() -> TechnicalOption {
        TechnicalOption::new("PostgreSQL", Category::Database)
    }

    #[test]
    fn default_constraints_adjust_nothing() {
        let deltas = ContextualAdjuster::adjustments_for(&option(), &UserConstraints::default());
        assert!(deltas.is_empty());
    }

    #[test]
    fn budget_rules() {
        let low = UserConstraints::default().with_budget(Budget::Low);
        let high = UserConstraints::default().with_budget(Budget::High);

        let deltas = ContextualAdjuster::adjustments_for(&option(), &low);
        assert_eq!(deltas.get(&Criterion::Cost), Some(&10.0));

        let deltas = ContextualAdjuster::adjustments_for(&option(), &high);
        assert_eq!(deltas.get(&Criterion::Performance), Some(&5.0));
    }

    #[test]
    fn timeline_rules() {
        let immediate = UserConstraints::default().with_timeline(Timeline::Immediate);
        let long = UserConstraints::default().with_timeline(Timeline::Long);

        let deltas = ContextualAdjuster::adjustments_for(&option(), &immediate);
        assert_eq!(deltas.get(&Criterion::LearningCurve), Some(&15.0));

        let deltas = ContextualAdjuster::adjustments_for(&option(), &long);
        assert_eq!(deltas.get(&Criterion::Scalability), Some(&10.0));
    }

    #[test]
    fn overlapping_rules_stack() {
        let constraints = UserConstraints::default()
            .with_timeline(Timeline::Immediate)
            .with_skill_level(SkillLevel::Junior)
            .with_experience("postgresql 14");

        let deltas = ContextualAdjuster::adjustments_for(&option(), &constraints);
        assert_eq!(deltas.get(&Criterion::LearningCurve), Some(&45.0));
        assert_eq!(deltas.get(&Criterion::Maintainability), Some(&15.0));
    }

    #[test]
    fn senior_and_large_scale_stack_on_performance() {
        let constraints = UserConstraints::default()
            .with_skill_level(SkillLevel::Senior)
            .with_budget(Budget::High)
            .with_scale(500, Traffic::High);

        let deltas = ContextualAdjuster::adjustments_for(&option(), &constraints);
        assert_eq!(deltas.get(&Criterion::Performance), Some(&20.0));
        assert_eq!(deltas.get(&Criterion::Scalability), Some(&15.0));
    }

    #[test]
    fn apply_clamps_stacked_deltas() {
        let scores = CriterionScores::uniform(90.0);
        let mut deltas = Adjustments::new();
        deltas.insert(Criterion::LearningCurve, 45.0);
        deltas.insert(Criterion::Cost, -120.0);

        let adjusted = ContextualAdjuster::apply(&scores, &deltas);
        assert_eq!(adjusted.get(Criterion::LearningCurve), 100.0);
        assert_eq!(adjusted.get(Criterion::Cost), 0.0);
        assert_eq!(adjusted.get(Criterion::Performance), 90.0);
    }
}
