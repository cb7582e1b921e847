//! Technical option value objects and typed attribute access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ScoringError;

/// Technology family an option belongs to. Decides which knowledge profile
/// scores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cloud,
    Backend,
    Database,
    Frontend,
    #[serde(other)]
    Unknown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cloud => "cloud",
            Category::Backend => "backend",
            Category::Database => "database",
            Category::Frontend => "frontend",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A free-form attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        AttributeValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Attribute map with fallible, typed accessors.
///
/// Accessors return `Ok(None)` for a missing key and `Err` when the key is
/// present but holds the wrong kind of value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Reads a finite number.
    pub fn number(&self, key: &str) -> Result<Option<f64>, ScoringError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(AttributeValue::Number(n)) if n.is_finite() => Ok(Some(*n)),
            Some(AttributeValue::Number(_)) => {
                Err(ScoringError::invalid_value(key, "number is not finite"))
            }
            Some(_) => Err(ScoringError::type_mismatch(key, "a number")),
        }
    }

    /// Reads a text value.
    pub fn text(&self, key: &str) -> Result<Option<&str>, ScoringError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(AttributeValue::Text(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ScoringError::type_mismatch(key, "text")),
        }
    }

    /// Reads a boolean flag.
    pub fn flag(&self, key: &str) -> Result<Option<bool>, ScoringError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(AttributeValue::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ScoringError::type_mismatch(key, "true or false")),
        }
    }

    /// Reads a count: either a number or the length of a list.
    pub fn count(&self, key: &str) -> Result<Option<f64>, ScoringError> {
        match self.0.get(key) {
            Some(AttributeValue::List(items)) => Ok(Some(items.len() as f64)),
            _ => self.number(key),
        }
    }

    /// Case-insensitive text comparison; missing keys never match.
    pub fn text_is(&self, key: &str, expected: &str) -> Result<bool, ScoringError> {
        Ok(self
            .text(key)?
            .map(|s| s.trim().eq_ignore_ascii_case(expected))
            .unwrap_or(false))
    }

    /// Flag that treats a missing key as false.
    pub fn is_set(&self, key: &str) -> Result<bool, ScoringError> {
        Ok(self.flag(key)?.unwrap_or(false))
    }

    /// Returns these attributes layered over `base`; on conflicts `self` wins.
    pub fn layered_over(&self, base: &Attributes) -> Attributes {
        let mut merged = base.0.clone();
        merged.extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Attributes(merged)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A candidate technology being compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalOption {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub attributes: Attributes,
}

impl TechnicalOption {
    /// Creates an option with no attributes.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            attributes: Attributes::new(),
        }
    }

    /// Adds an attribute (builder style).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Lowercased, trimmed name used for lookups and duplicate detection.
    pub fn lookup_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Identity of this option within a request.
    pub fn key(&self) -> OptionKey {
        OptionKey::new(self.name.clone(), self.category)
    }

    pub fn is(&self, key: &OptionKey) -> bool {
        self.name == key.name && self.category == key.category
    }
}

/// Name plus category. Two options may share a name across categories, so
/// results refer to options by this key rather than by name alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OptionKey {
    pub name: String,
    pub category: Category,
}

impl OptionKey {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// The name, qualified with the category when another option in `all`
    /// shares it (case-insensitively).
    pub fn display_among<'a>(&self, all: impl IntoIterator<Item = &'a TechnicalOption>) -> String {
        let lookup = self.name.trim().to_lowercase();
        let shared = all
            .into_iter()
            .any(|other| other.category != self.category && other.lookup_name() == lookup);
        if shared {
            self.to_string()
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attributes {
        [
            ("marketShare", AttributeValue::from(32)),
            ("pricingModel", AttributeValue::from("Pay-As-You-Go")),
            ("freeTier", AttributeValue::from(true)),
            ("certifications", AttributeValue::from(vec!["iso27001", "soc2"])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn key_is_qualified_only_when_names_collide() {
        let options = vec![
            TechnicalOption::new("Redis", Category::Database),
            TechnicalOption::new("redis", Category::Unknown),
            TechnicalOption::new("AWS", Category::Cloud),
        ];

        assert_eq!(options[0].key().display_among(&options), "Redis (database)");
        assert_eq!(options[1].key().display_among(&options), "redis (unknown)");
        assert_eq!(options[2].key().display_among(&options), "AWS");
        assert!(options[0].is(&OptionKey::new("Redis", Category::Database)));
        assert!(!options[1].is(&options[0].key()));
    }

    #[test]
    fn option_key_serializes_name_and_category() {
        let key = OptionKey::new("Redis", Category::Database);
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            r#"{"name":"Redis","category":"database"}"#
        );
    }

    #[test]
    fn typed_accessors_read_matching_values() {
        let attrs = sample();
        assert_eq!(attrs.number("marketShare").unwrap(), Some(32.0));
        assert_eq!(attrs.text("pricingModel").unwrap(), Some("Pay-As-You-Go"));
        assert_eq!(attrs.flag("freeTier").unwrap(), Some(true));
        assert_eq!(attrs.count("certifications").unwrap(), Some(2.0));
        assert_eq!(attrs.count("marketShare").unwrap(), Some(32.0));
    }

    #[test]
    fn typed_accessors_reject_wrong_types() {
        let attrs = sample();
        assert!(attrs.number("pricingModel").is_err());
        assert!(attrs.text("marketShare").is_err());
        assert!(attrs.flag("marketShare").is_err());
    }

    #[test]
    fn missing_keys_are_none() {
        let attrs = sample();
        assert_eq!(attrs.number("regionCount").unwrap(), None);
        assert!(!attrs.is_set("autoScaling").unwrap());
        assert!(!attrs.text_is("costTier", "low").unwrap());
    }

    #[test]
    fn text_is_ignores_case() {
        let attrs = sample();
        assert!(attrs.text_is("pricingModel", "pay-as-you-go").unwrap());
    }

    #[test]
    fn layered_over_prefers_own_values() {
        let defaults: Attributes = [("marketShare", 1), ("regionCount", 5)].into_iter().collect();
        let merged = sample().layered_over(&defaults);
        assert_eq!(merged.number("marketShare").unwrap(), Some(32.0));
        assert_eq!(merged.number("regionCount").unwrap(), Some(5.0));
    }

    #[test]
    fn unknown_category_string_deserializes_to_unknown() {
        let option: TechnicalOption =
            serde_json::from_str(r#"{"name":"Terraform","category":"devops"}"#).unwrap();
        assert_eq!(option.category, Category::Unknown);
        assert!(option.attributes.is_empty());
    }

    #[test]
    fn missing_category_fails_to_deserialize() {
        let result: Result<TechnicalOption, _> = serde_json::from_str(r#"{"name":"AWS"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn attributes_deserialize_untagged() {
        let option: TechnicalOption = serde_json::from_str(
            r#"{"name":"AWS","category":"cloud","attributes":{"marketShare":32,"freeTier":true,"pricingModel":"pay-as-you-go","regions":["us","eu"]}}"#,
        )
        .unwrap();
        assert_eq!(option.attributes.number("marketShare").unwrap(), Some(32.0));
        assert_eq!(option.attributes.flag("freeTier").unwrap(), Some(true));
        assert_eq!(option.attributes.count("regions").unwrap(), Some(2.0));
    }
}
