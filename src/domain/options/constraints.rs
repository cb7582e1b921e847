//! User constraints: budget, scale, team, timeline and priorities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{PriorityKey, ValidationError};

/// Lowest allowed priority value.
pub const MIN_PRIORITY: i64 = 1;

/// Highest allowed priority value.
pub const MAX_PRIORITY: i64 = 5;

/// Priority used when the user leaves one unset.
pub const DEFAULT_PRIORITY: i64 = 3;

/// Users above this count make a deployment "large scale".
pub const LARGE_SCALE_USERS: u64 = 100_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Junior,
    #[default]
    Intermediate,
    Senior,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Immediate,
    Short,
    #[default]
    Medium,
    Long,
}

/// Expected load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(default = "default_users")]
    pub users: u64,
    #[serde(default)]
    pub traffic: Traffic,
}

impl Scale {
    /// More than 100k users or high traffic.
    pub fn is_large(&self) -> bool {
        self.users > LARGE_SCALE_USERS || self.traffic == Traffic::High
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            users: default_users(),
            traffic: Traffic::default(),
        }
    }
}

fn default_users() -> u64 {
    1_000
}

/// The team that will own the chosen technology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Technologies the team has already worked with.
    #[serde(default)]
    pub experience: BTreeSet<String>,
}

impl Team {
    /// True when any experience entry mentions the option name (case-insensitive).
    pub fn has_experience_with(&self, option_name: &str) -> bool {
        let needle = option_name.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.experience
            .iter()
            .any(|entry| entry.to_lowercase().contains(&needle))
    }
}

/// Raw 1-5 importance per user-facing priority key.
///
/// Values are held as `i64` so that out-of-range input such as `-1` or `256`
/// deserializes and is rejected by [`Priorities::validate`] with the offending
/// field named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priorities {
    #[serde(default = "default_priority")]
    pub cost: i64,
    #[serde(default = "default_priority")]
    pub performance: i64,
    #[serde(default = "default_priority")]
    pub ease_of_use: i64,
    #[serde(default = "default_priority")]
    pub scalability: i64,
    #[serde(default = "default_priority")]
    pub vendor_lock_in: i64,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

impl Priorities {
    /// All priorities set to the same value.
    pub fn uniform(value: i64) -> Self {
        Self {
            cost: value,
            performance: value,
            ease_of_use: value,
            scalability: value,
            vendor_lock_in: value,
        }
    }

    pub fn get(&self, key: PriorityKey) -> i64 {
        match key {
            PriorityKey::Cost => self.cost,
            PriorityKey::Performance => self.performance,
            PriorityKey::EaseOfUse => self.ease_of_use,
            PriorityKey::Scalability => self.scalability,
            PriorityKey::VendorLockIn => self.vendor_lock_in,
        }
    }

    pub fn set(&mut self, key: PriorityKey, value: i64) {
        match key {
            PriorityKey::Cost => self.cost = value,
            PriorityKey::Performance => self.performance = value,
            PriorityKey::EaseOfUse => self.ease_of_use = value,
            PriorityKey::Scalability => self.scalability = value,
            PriorityKey::VendorLockIn => self.vendor_lock_in = value,
        }
    }

    /// Returns a copy with one priority changed.
    pub fn with(mut self, key: PriorityKey, value: i64) -> Self {
        self.set(key, value);
        self
    }

    /// Iterates `(key, raw value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PriorityKey, i64)> + '_ {
        PriorityKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Highest raw value across all keys.
    pub fn max_value(&self) -> i64 {
        self.iter().map(|(_, v)| v).max().unwrap_or(DEFAULT_PRIORITY)
    }

    /// Keys holding the highest raw value.
    pub fn dominant(&self) -> Vec<PriorityKey> {
        let max = self.max_value();
        self.iter().filter(|(_, v)| *v == max).map(|(k, _)| k).collect()
    }

    /// Checks every value lies in [1, 5].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (key, value) in self.iter() {
            if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("priorities.{}", key.key()),
                    MIN_PRIORITY,
                    MAX_PRIORITY,
                    value,
                ));
            }
        }
        Ok(())
    }
}

impl Default for Priorities {
    fn default() -> Self {
        Self::uniform(DEFAULT_PRIORITY)
    }
}

/// Validated situational constraints supplied by the intake layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConstraints {
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub scale: Scale,
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub priorities: Priorities,
}

impl UserConstraints {
    pub fn with_priorities(mut self, priorities: Priorities) -> Self {
        self.priorities = priorities;
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn with_skill_level(mut self, skill_level: SkillLevel) -> Self {
        self.team.skill_level = skill_level;
        self
    }

    pub fn with_experience(mut self, technology: impl Into<String>) -> Self {
        self.team.experience.insert(technology.into());
        self
    }

    pub fn with_scale(mut self, users: u64, traffic: Traffic) -> Self {
        self.scale = Scale { users, traffic };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let constraints: UserConstraints = serde_json::from_str("{}").unwrap();
        assert_eq!(constraints.budget, Budget::Medium);
        assert_eq!(constraints.timeline, Timeline::Medium);
        assert_eq!(constraints.team.skill_level, SkillLevel::Intermediate);
        assert_eq!(constraints.scale.users, 1_000);
        assert_eq!(constraints.priorities, Priorities::uniform(3));
    }

    #[test]
    fn partial_priorities_default_to_medium() {
        let constraints: UserConstraints =
            serde_json::from_str(r#"{"priorities":{"cost":5,"easeOfUse":4}}"#).unwrap();
        assert_eq!(constraints.priorities.cost, 5);
        assert_eq!(constraints.priorities.ease_of_use, 4);
        assert_eq!(constraints.priorities.performance, 3);
        assert_eq!(constraints.priorities.vendor_lock_in, 3);
    }

    #[test]
    fn nested_fields_use_camel_case() {
        let constraints: UserConstraints = serde_json::from_str(
            r#"{"team":{"skillLevel":"senior","experience":["AWS Lambda"]},"scale":{"users":250000,"traffic":"high"}}"#,
        )
        .unwrap();
        assert_eq!(constraints.team.skill_level, SkillLevel::Senior);
        assert!(constraints.scale.is_large());
    }

    #[test]
    fn validate_rejects_out_of_range_priority() {
        let priorities = Priorities::default().with(PriorityKey::Performance, 0);
        let err = priorities.validate().unwrap_err();
        assert_eq!(err.field(), "priorities.performance");

        let priorities = Priorities::default().with(PriorityKey::VendorLockIn, 6);
        assert!(priorities.validate().is_err());
    }

    #[test]
    fn values_outside_a_byte_deserialize_and_fail_validation() {
        let constraints: UserConstraints =
            serde_json::from_str(r#"{"priorities":{"cost":-1,"scalability":256}}"#).unwrap();
        assert_eq!(constraints.priorities.cost, -1);
        assert_eq!(constraints.priorities.scalability, 256);

        let err = constraints.priorities.validate().unwrap_err();
        assert_eq!(err.field(), "priorities.cost");
        assert_eq!(
            err.to_string(),
            "Field 'priorities.cost' must be between 1 and 5, got -1"
        );
    }

    #[test]
    fn validate_accepts_full_range() {
        for value in MIN_PRIORITY..=MAX_PRIORITY {
            assert!(Priorities::uniform(value).validate().is_ok());
        }
    }

    #[test]
    fn dominant_returns_all_maximal_keys() {
        let priorities = Priorities::uniform(2)
            .with(PriorityKey::Cost, 5)
            .with(PriorityKey::EaseOfUse, 5);
        assert_eq!(
            priorities.dominant(),
            vec![PriorityKey::Cost, PriorityKey::EaseOfUse]
        );
    }

    #[test]
    fn experience_match_is_case_insensitive_substring() {
        let team = Team {
            skill_level: SkillLevel::Junior,
            experience: ["AWS Lambda".to_string(), "postgresql".to_string()]
                .into_iter()
                .collect(),
        };
        assert!(team.has_experience_with("aws"));
        assert!(team.has_experience_with("PostgreSQL"));
        assert!(!team.has_experience_with("MongoDB"));
        assert!(!team.has_experience_with("  "));
    }

    #[test]
    fn scale_threshold_is_strict() {
        let at_threshold = Scale { users: 100_000, traffic: Traffic::Medium };
        assert!(!at_threshold.is_large());
        let above = Scale { users: 100_001, traffic: Traffic::Low };
        assert!(above.is_large());
    }
}
