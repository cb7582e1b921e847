//! Database engine knowledge.

use crate::domain::foundation::{Criterion, ScoringError, NEUTRAL_SCORE};
use crate::domain::options::Attributes;

use super::registry::{learning_tier_bonus, CategoryProfile, CriterionDef, KnownTechnology, ScoringRule};

const REQUIRED_FIELDS: &[&str] = &["dataModel", "pricingModel", "acidCompliant", "learningCurve"];

pub fn profile() -> CategoryProfile {
    CategoryProfile {
        criteria: vec![
            CriterionDef::new(Criterion::Cost, cost),
            CriterionDef::new(Criterion::Performance, performance),
            CriterionDef::new(Criterion::Scalability, scalability),
            CriterionDef::new(Criterion::LearningCurve, learning_curve),
            CriterionDef::new(Criterion::VendorLockIn, vendor_lock_in),
            CriterionDef::new(Criterion::Maintainability, maintainability),
        ],
        rules: vec![
            ScoringRule {
                name: "ACID compliance",
                applies: |a| a.is_set("acidCompliant"),
                adjustment: 5.0,
                affected: &[Criterion::Maintainability],
            },
            ScoringRule {
                name: "SQL interface",
                applies: |a| a.text_is("queryLanguage", "sql"),
                adjustment: 5.0,
                affected: &[Criterion::LearningCurve],
            },
            ScoringRule {
                name: "sharded and replicated",
                applies: |a| Ok(a.is_set("shardingSupport")? && a.is_set("replication")?),
                adjustment: 5.0,
                affected: &[Criterion::Scalability],
            },
            ScoringRule {
                name: "open-source licensing",
                applies: |a| a.text_is("pricingModel", "open-source"),
                adjustment: 5.0,
                affected: &[Criterion::Cost],
            },
        ],
        defaults: attributes! {
            "dataModel" => "relational",
            "pricingModel" => "open-source",
            "acidCompliant" => false,
            "learningCurve" => "moderate",
            "queryLanguage" => "sql",
        },
        required_fields: REQUIRED_FIELDS,
        known: known_engines(),
    }
}

fn cost(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.text_is("pricingModel", "open-source")? {
        score += 20.0;
    } else if a.text_is("pricingModel", "managed")? {
        score += 5.0;
    } else if a.text_is("pricingModel", "commercial")? {
        score -= 15.0;
    }
    Ok(score)
}

fn performance(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if let Some(latency) = a.number("readLatencyMs")? {
        if latency < 0.0 {
            return Err(ScoringError::invalid_value("readLatencyMs", "cannot be negative"));
        }
        score += if latency <= 1.0 {
            30.0
        } else if latency <= 5.0 {
            20.0
        } else if latency <= 20.0 {
            10.0
        } else if latency > 100.0 {
            -10.0
        } else {
            0.0
        };
    }
    if a.is_set("inMemory")? {
        score += 10.0;
    }
    Ok(score)
}

fn scalability(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.is_set("shardingSupport")? {
        score += 20.0;
    }
    if a.is_set("replication")? {
        score += 10.0;
    }
    if a.text_is("dataModel", "relational")? {
        score -= 5.0;
    }
    Ok(score)
}

fn learning_curve(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE + learning_tier_bonus(a)?;
    if a.text_is("queryLanguage", "sql")? {
        score += 10.0;
    }
    Ok(score)
}

fn vendor_lock_in(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.text_is("pricingModel", "open-source")? {
        score += 20.0;
    }
    if a.text_is("queryLanguage", "sql")? {
        score += 10.0;
    } else if a.text_is("queryLanguage", "proprietary")? {
        score -= 10.0;
    }
    if a.is_set("managedOnly")? {
        score -= 20.0;
    }
    Ok(score)
}

fn maintainability(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE + a.number("maturityYears")?.unwrap_or(0.0).min(20.0);
    if a.is_set("acidCompliant")? {
        score += 10.0;
    }
    if a.is_set("managedOffering")? {
        score += 10.0;
    }
    Ok(score)
}

fn known_engines() -> Vec<KnownTechnology> {
    vec![
        KnownTechnology {
            name: "PostgreSQL",
            aliases: &["postgres", "pg"],
            attributes: attributes! {
                "dataModel" => "relational",
                "pricingModel" => "open-source",
                "acidCompliant" => true,
                "learningCurve" => "moderate",
                "queryLanguage" => "sql",
                "readLatencyMs" => 5,
                "shardingSupport" => false,
                "replication" => true,
                "maturityYears" => 27,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "MySQL",
            aliases: &["mariadb"],
            attributes: attributes! {
                "dataModel" => "relational",
                "pricingModel" => "open-source",
                "acidCompliant" => true,
                "learningCurve" => "easy",
                "queryLanguage" => "sql",
                "readLatencyMs" => 5,
                "shardingSupport" => false,
                "replication" => true,
                "maturityYears" => 29,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "MongoDB",
            aliases: &["mongo"],
            attributes: attributes! {
                "dataModel" => "document",
                "pricingModel" => "open-source",
                "acidCompliant" => false,
                "learningCurve" => "easy",
                "queryLanguage" => "proprietary",
                "readLatencyMs" => 5,
                "shardingSupport" => true,
                "replication" => true,
                "maturityYears" => 15,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "Redis",
            aliases: &[],
            attributes: attributes! {
                "dataModel" => "key-value",
                "pricingModel" => "open-source",
                "acidCompliant" => false,
                "learningCurve" => "easy",
                "queryLanguage" => "proprietary",
                "readLatencyMs" => 0.5,
                "inMemory" => true,
                "shardingSupport" => true,
                "replication" => true,
                "maturityYears" => 15,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "DynamoDB",
            aliases: &["amazon dynamodb"],
            attributes: attributes! {
                "dataModel" => "key-value",
                "pricingModel" => "managed",
                "acidCompliant" => false,
                "learningCurve" => "moderate",
                "queryLanguage" => "proprietary",
                "readLatencyMs" => 5,
                "shardingSupport" => true,
                "replication" => true,
                "managedOnly" => true,
                "maturityYears" => 12,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "Cassandra",
            aliases: &["apache cassandra"],
            attributes: attributes! {
                "dataModel" => "wide-column",
                "pricingModel" => "open-source",
                "acidCompliant" => false,
                "learningCurve" => "steep",
                "queryLanguage" => "cql",
                "readLatencyMs" => 10,
                "shardingSupport" => true,
                "replication" => true,
                "maturityYears" => 15,
                "managedOffering" => true,
            },
        },
        KnownTechnology {
            name: "SQLite",
            aliases: &[],
            attributes: attributes! {
                "dataModel" => "relational",
                "pricingModel" => "open-source",
                "acidCompliant" => true,
                "learningCurve" => "easy",
                "queryLanguage" => "sql",
                "readLatencyMs" => 1,
                "shardingSupport" => false,
                "replication" => false,
                "maturityYears" => 24,
                "managedOffering" => false,
            },
        },
    ]
}
