//! Standard evaluation criteria and user-facing priority keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six standard evaluation dimensions every option is scored on.
///
/// Higher scores are always better: for `VendorLockIn` a high score means
/// little lock-in, for `LearningCurve` a high score means easy to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Cost,
    Performance,
    Scalability,
    LearningCurve,
    VendorLockIn,
    Maintainability,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Cost,
        Criterion::Performance,
        Criterion::Scalability,
        Criterion::LearningCurve,
        Criterion::VendorLockIn,
        Criterion::Maintainability,
    ];

    /// Returns the wire key (camelCase).
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Cost => "cost",
            Criterion::Performance => "performance",
            Criterion::Scalability => "scalability",
            Criterion::LearningCurve => "learningCurve",
            Criterion::VendorLockIn => "vendorLockIn",
            Criterion::Maintainability => "maintainability",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Cost => "Cost",
            Criterion::Performance => "Performance",
            Criterion::Scalability => "Scalability",
            Criterion::LearningCurve => "Learning curve",
            Criterion::VendorLockIn => "Vendor lock-in",
            Criterion::Maintainability => "Maintainability",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A user-settable priority. Maintainability has no key of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityKey {
    Cost,
    Performance,
    EaseOfUse,
    Scalability,
    VendorLockIn,
}

impl PriorityKey {
    /// All priority keys in canonical order.
    pub const ALL: [PriorityKey; 5] = [
        PriorityKey::Cost,
        PriorityKey::Performance,
        PriorityKey::EaseOfUse,
        PriorityKey::Scalability,
        PriorityKey::VendorLockIn,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PriorityKey::Cost => "cost",
            PriorityKey::Performance => "performance",
            PriorityKey::EaseOfUse => "easeOfUse",
            PriorityKey::Scalability => "scalability",
            PriorityKey::VendorLockIn => "vendorLockIn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityKey::Cost => "cost",
            PriorityKey::Performance => "performance",
            PriorityKey::EaseOfUse => "ease of use",
            PriorityKey::Scalability => "scalability",
            PriorityKey::VendorLockIn => "avoiding vendor lock-in",
        }
    }
}

impl fmt::Display for PriorityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_serializes_camel_case() {
        let json = serde_json::to_string(&Criterion::LearningCurve).unwrap();
        assert_eq!(json, "\"learningCurve\"");
        let parsed: Criterion = serde_json::from_str("\"vendorLockIn\"").unwrap();
        assert_eq!(parsed, Criterion::VendorLockIn);
    }

    #[test]
    fn criterion_key_matches_serde_name() {
        for criterion in Criterion::ALL {
            let json = serde_json::to_string(&criterion).unwrap();
            assert_eq!(json, format!("\"{}\"", criterion.key()));
        }
    }

    #[test]
    fn priority_key_matches_serde_name() {
        for key in PriorityKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.key()));
        }
    }
}
