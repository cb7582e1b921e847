//! Tradeoff Analyzer - Per-criterion leaders and laggards, and compromises.

use std::collections::BTreeSet;

use crate::domain::foundation::Criterion;

use super::weighting::CriterionWeights;
use super::{Compromise, Impact, OptionScore, TradeOffAnalysis};

/// Default gap (in points) beyond which trailing counts as a compromise.
pub const DEFAULT_COMPROMISE_GAP: f64 = 20.0;

/// Impact value above which a compromise is high impact.
pub const HIGH_IMPACT_THRESHOLD: f64 = 0.15;

/// Impact value above which a compromise is medium impact.
pub const MEDIUM_IMPACT_THRESHOLD: f64 = 0.08;

/// Analyzer for criterion-level tradeoffs between options.
pub struct TradeoffAnalyzer;

impl TradeoffAnalyzer {
    /// Finds the strongest and weakest option per criterion and every
    /// compromise larger than `gap_threshold`.
    ///
    /// # Edge Cases
    /// - Ties: the first option in input order wins both maps
    /// - Single option: no compromises (nothing to trail)
    /// - Empty input: empty analysis
    pub fn analyze(
        scores: &[OptionScore],
        weights: &CriterionWeights,
        gap_threshold: f64,
    ) -> TradeOffAnalysis {
        let mut analysis = TradeOffAnalysis::default();

        for criterion in Self::criteria_present(scores) {
            if let Some(best) = Self::extreme(scores, criterion, |candidate, current| candidate > current) {
                analysis
                    .strongest_option
                    .insert(criterion, best.option.key());
            }
            if let Some(worst) = Self::extreme(scores, criterion, |candidate, current| candidate < current) {
                analysis
                    .weakest_option
                    .insert(criterion, worst.option.key());
            }
        }

        analysis.compromises = Self::find_compromises(scores, weights, gap_threshold);
        analysis
    }

    /// Compromises where an option trails the best other option by more
    /// than `gap_threshold` points.
    ///
    /// Descriptions qualify a name with its category when two options share it.
    pub fn find_compromises(
        scores: &[OptionScore],
        weights: &CriterionWeights,
        gap_threshold: f64,
    ) -> Vec<Compromise> {
        let mut compromises = Vec::new();
        let display = |score: &OptionScore| score.option.key().display_among(scores.iter().map(|s| &s.option));

        for (index, current) in scores.iter().enumerate() {
            for (criterion, own) in current.criteria_scores.iter() {
                let best_other = scores
                    .iter()
                    .enumerate()
                    .filter(|(other_index, _)| *other_index != index)
                    .map(|(_, other)| (other, other.criteria_scores.get(criterion)))
                    .fold(None::<(&OptionScore, f64)>, |best, (other, value)| match best {
                        Some((_, best_value)) if best_value >= value => best,
                        _ => Some((other, value)),
                    });

                let Some((leader, best_value)) = best_other else {
                    continue;
                };

                let gap = best_value - own;
                if gap <= gap_threshold {
                    continue;
                }

                let weight = weights.get(&criterion).copied().unwrap_or(0.0);
                compromises.push(Compromise {
                    option: current.option.key(),
                    description: format!(
                        "{} trails {} on {} by {:.0} points ({:.0} vs {:.0})",
                        display(current),
                        display(leader),
                        criterion.label().to_lowercase(),
                        gap,
                        own,
                        best_value
                    ),
                    impact: Self::impact_for(gap, weight),
                    affected_criteria: vec![criterion],
                    gap,
                });
            }
        }

        compromises
    }

    /// Impact tier from the score gap and how much the user weights the criterion.
    pub fn impact_for(gap: f64, weight: f64) -> Impact {
        let value = (gap / 100.0) * weight;
        if value > HIGH_IMPACT_THRESHOLD {
            Impact::High
        } else if value > MEDIUM_IMPACT_THRESHOLD {
            Impact::Medium
        } else {
            Impact::Low
        }
    }

    fn criteria_present(scores: &[OptionScore]) -> BTreeSet<Criterion> {
        scores
            .iter()
            .flat_map(|s| s.criteria_scores.criteria())
            .collect()
    }

    /// First option that no later option beats under `better`.
    fn extreme(
        scores: &[OptionScore],
        criterion: Criterion,
        better: impl Fn(f64, f64) -> bool,
    ) -> Option<&OptionScore> {
        let mut iter = scores.iter();
        let first = iter.next()?;
        let mut chosen = (first, first.criteria_scores.get(criterion));
        for candidate in iter {
            let value = candidate.criteria_scores.get(criterion);
            if better(value, chosen.1) {
                chosen = (candidate, value);
            }
        }
        Some(chosen.0)
    }
}
