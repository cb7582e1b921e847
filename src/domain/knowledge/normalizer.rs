//! Option Normalizer - Completes option attributes before scoring.

use serde::Serialize;
use tracing::debug;

use crate::domain::options::{Category, TechnicalOption};

use super::KnowledgeRegistry;

/// An option whose attributes have been completed from domain knowledge.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedOption {
    pub option: TechnicalOption,
    /// Canonical name when the technology is in the known list.
    pub known_as: Option<&'static str>,
    /// Required fields filled from category defaults.
    pub substituted_fields: Vec<String>,
    pub warnings: Vec<String>,
}

impl NormalizedOption {
    pub fn is_known(&self) -> bool {
        self.known_as.is_some()
    }
}

/// Fills missing attributes so every option is scored on a complete set.
pub struct OptionNormalizer;

impl OptionNormalizer {
    /// Layers the option's attributes over the registry's knowledge.
    ///
    /// Known technologies take their knowledge profile as the base layer.
    /// Unknown ones take the category defaults and report each required field
    /// that had to be substituted. The user's own attributes always win.
    pub fn normalize(option: &TechnicalOption, registry: &KnowledgeRegistry) -> NormalizedOption {
        let profile = registry.profile_for(option.category);
        let mut warnings = Vec::new();

        if !registry.has_profile(option.category) && option.category != Category::Unknown {
            warnings.push(format!(
                "No domain knowledge for {} technologies; '{}' is scored neutrally",
                option.category, option.name
            ));
        }

        if let Some(known) = profile.find_known(&option.lookup_name()) {
            debug!(option = %option.name, known_as = known.name, "Using known technology profile");
            let mut normalized = option.clone();
            normalized.attributes = option.attributes.layered_over(&known.attributes);
            return NormalizedOption {
                option: normalized,
                known_as: Some(known.name),
                substituted_fields: Vec::new(),
                warnings,
            };
        }

        let substituted_fields: Vec<String> = profile
            .required_fields
            .iter()
            .filter(|field| !option.attributes.contains_key(field))
            .filter(|field| profile.defaults.contains_key(field))
            .map(|field| field.to_string())
            .collect();

        if !substituted_fields.is_empty() {
            warnings.push(format!(
                "'{}' is not a recognized {} technology; missing {} filled with category defaults",
                option.name,
                option.category,
                substituted_fields.join(", ")
            ));
        }

        let missing_without_default: Vec<&str> = profile
            .required_fields
            .iter()
            .copied()
            .filter(|field| !option.attributes.contains_key(field))
            .filter(|field| !profile.defaults.contains_key(field))
            .collect();

        if !missing_without_default.is_empty() {
            warnings.push(format!(
                "'{}' is missing {}; affected criteria receive no bonus",
                option.name,
                missing_without_default.join(", ")
            ));
        }

        let mut normalized = option.clone();
        normalized.attributes = option.attributes.layered_over(&profile.defaults);

        NormalizedOption {
            option: normalized,
            known_as: None,
            substituted_fields,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_technology_merges_profile_under_user_values() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("AWS", Category::Cloud).with_attribute("marketShare", 40);

        let normalized = OptionNormalizer::normalize(&option, &registry);

        assert_eq!(normalized.known_as, Some("AWS"));
        assert!(normalized.warnings.is_empty());
        let attrs = &normalized.option.attributes;
        assert_eq!(attrs.number("marketShare").unwrap(), Some(40.0));
        assert_eq!(attrs.number("regionCount").unwrap(), Some(30.0));
    }

    #[test]
    fn unknown_technology_gets_category_defaults() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("Acme Cloud", Category::Cloud)
            .with_attribute("pricingModel", "reserved");

        let normalized = OptionNormalizer::normalize(&option, &registry);

        assert!(!normalized.is_known());
        assert_eq!(
            normalized.substituted_fields,
            vec!["marketShare", "regionCount", "serviceCount", "learningCurve"]
        );
        let attrs = &normalized.option.attributes;
        assert!(attrs.text_is("pricingModel", "reserved").unwrap());
        assert_eq!(attrs.number("regionCount").unwrap(), Some(5.0));
        assert_eq!(normalized.warnings.len(), 1);
        assert!(normalized.warnings[0].contains("Acme Cloud"));
    }

    #[test]
    fn complete_unknown_option_has_no_warnings() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("Ledger DB", Category::Database)
            .with_attribute("dataModel", "relational")
            .with_attribute("pricingModel", "commercial")
            .with_attribute("acidCompliant", true)
            .with_attribute("learningCurve", "steep");

        let normalized = OptionNormalizer::normalize(&option, &registry);
        assert!(normalized.substituted_fields.is_empty());
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn backend_language_has_no_default() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("Phoenix", Category::Backend);

        let normalized = OptionNormalizer::normalize(&option, &registry);
        assert!(!normalized.substituted_fields.contains(&"language".to_string()));
        assert!(normalized.warnings.iter().any(|w| w.contains("missing language")));
    }

    #[test]
    fn categories_without_knowledge_warn() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("React", Category::Frontend);

        let normalized = OptionNormalizer::normalize(&option, &registry);
        assert_eq!(normalized.warnings.len(), 1);
        assert!(normalized.warnings[0].contains("No domain knowledge"));
    }

    #[test]
    fn unknown_category_is_left_to_the_validator() {
        let registry = KnowledgeRegistry::standard();
        let option = TechnicalOption::new("Terraform", Category::Unknown);
        assert!(OptionNormalizer::normalize(&option, &registry).warnings.is_empty());
    }
}
