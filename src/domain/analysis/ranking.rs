//! Ranker - Orders option scores into dense ranks.

use super::{OptionScore, RankedOption};

pub struct Ranker;

impl Ranker {
    /// Sorts by weighted score, highest first, and assigns ranks 1..N.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(scores: &[OptionScore]) -> Vec<RankedOption> {
        let mut ordered: Vec<&OptionScore> = scores.iter().collect();
        ordered.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, score)| RankedOption {
                option: score.option.clone(),
                rank: index + 1,
                score: score.weighted_score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{to_normalized, CriterionScores};
    use crate::domain::options::{Category, TechnicalOption};

    fn score(name: &str, weighted: f64) -> OptionScore {
        OptionScore {
            option: TechnicalOption::new(name, Category::Cloud),
            criteria_scores: CriterionScores::uniform(weighted),
            weighted_score: weighted,
            normalized_score: to_normalized(weighted),
        }
    }

    #[test]
    fn ranks_descending() {
        let rankings = Ranker::rank(&[score("A", 55.0), score("B", 81.0), score("C", 67.0)]);
        let names: Vec<_> = rankings.iter().map(|r| r.option.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(rankings.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rankings = Ranker::rank(&[score("First", 70.0), score("Second", 70.0)]);
        assert_eq!(rankings[0].option.name, "First");
        assert_eq!(rankings[1].option.name, "Second");
        assert_eq!(rankings[1].rank, 2);
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(Ranker::rank(&[]).is_empty());
    }
}
