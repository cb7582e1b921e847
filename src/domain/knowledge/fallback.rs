//! Neutral profile for categories without domain knowledge.

use crate::domain::foundation::{Criterion, ScoringError, NEUTRAL_SCORE};
use crate::domain::options::Attributes;

use super::registry::{CategoryProfile, CriterionDef};

fn neutral(_: &Attributes) -> Result<f64, ScoringError> {
    Ok(NEUTRAL_SCORE)
}

/// Every criterion scores 50; no rules, defaults or known technologies.
pub fn profile() -> CategoryProfile {
    CategoryProfile {
        criteria: Criterion::ALL
            .into_iter()
            .map(|criterion| CriterionDef::new(criterion, neutral))
            .collect(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge::KnowledgeRegistry;
    use crate::domain::options::{Category, TechnicalOption};

    #[test]
    fn unknown_category_scores_exactly_neutral() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("Terraform", Category::Unknown)
            .with_attribute("marketShare", 60)
            .with_attribute("pricingModel", "pay-as-you-go");

        let base = registry.base_scores(&option);
        for criterion in Criterion::ALL {
            assert_eq!(base.scores.get(criterion), NEUTRAL_SCORE);
        }
        assert!(base.warnings.is_empty());
    }

    #[test]
    fn frontend_falls_back_to_neutral() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("React", Category::Frontend);
        let base = registry.base_scores(&option);
        assert_eq!(base.scores, crate::domain::foundation::CriterionScores::uniform(NEUTRAL_SCORE));
    }
}
