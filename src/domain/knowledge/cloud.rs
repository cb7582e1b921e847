//! Cloud platform knowledge.

use crate::domain::foundation::{Criterion, ScoringError, NEUTRAL_SCORE};
use crate::domain::options::Attributes;

use super::registry::{learning_tier_bonus, CategoryProfile, CriterionDef, KnownTechnology, ScoringRule};

const REQUIRED_FIELDS: &[&str] = &[
    "pricingModel",
    "marketShare",
    "regionCount",
    "serviceCount",
    "learningCurve",
];

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
                name: "pay-as-you-go pricing",
                applies: |a| a.text_is("pricingModel", "pay-as-you-go"),
                adjustment: 5.0,
                affected: &[Criterion::Cost],
            },
            ScoringRule {
                name: "global region footprint",
                applies: |a| Ok(a.number("regionCount")?.unwrap_or(0.0) >= 20.0),
                adjustment: 5.0,
                affected: &[Criterion::Performance, Criterion::Scalability],
            },
            ScoringRule {
                name: "free tier",
                applies: |a| a.is_set("freeTier"),
                adjustment: 5.0,
                affected: &[Criterion::LearningCurve],
            },
            ScoringRule {
                name: "broad compliance certification",
                applies: |a| Ok(a.count("certifications")?.unwrap_or(0.0) >= 10.0),
                adjustment: 5.0,
                affected: &[Criterion::Maintainability],
            },
        ],
        defaults: attributes! {
            "pricingModel" => "pay-as-you-go",
            "marketShare" => 1,
            "regionCount" => 5,
            "serviceCount" => 20,
            "learningCurve" => "moderate",
            "documentation" => "good",
        },
        required_fields: REQUIRED_FIELDS,
        known: known_platforms(),
    }
}

fn cost(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.text_is("pricingModel", "pay-as-you-go")? {
        score += 10.0;
    } else if a.text_is("pricingModel", "reserved")? {
        score += 5.0;
    }
    if a.text_is("costTier", "low")? {
        score += 20.0;
    } else if a.text_is("costTier", "medium")? {
        score += 5.0;
    } else if a.text_is("costTier", "high")? {
        score -= 10.0;
    }
    if a.is_set("freeTier")? {
        score += 5.0;
    }
    Ok(score)
}

fn performance(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    let services = a.count("serviceCount")?.unwrap_or(0.0);
    score += if services >= 100.0 {
        15.0
    } else if services >= 50.0 {
        10.0
    } else if services >= 20.0 {
        5.0
    } else {
        0.0
    };
    score += (a.number("regionCount")?.unwrap_or(0.0) / 2.0).min(15.0);
    Ok(score)
}

fn scalability(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    let share = a.number("marketShare")?.unwrap_or(0.0);
    score += if share >= 20.0 {
        20.0
    } else if share >= 10.0 {
        10.0
    } else if share >= 5.0 {
        5.0
    } else {
        0.0
    };
    if a.number("regionCount")?.unwrap_or(0.0) >= 20.0 {
        score += 10.0;
    }
    if a.is_set("autoScaling")? {
        score += 10.0;
    }
    Ok(score)
}

fn learning_curve(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE + learning_tier_bonus(a)?;
    if a.text_is("documentation", "excellent")? {
        score += 10.0;
    } else if a.text_is("documentation", "good")? {
        score += 5.0;
    }
    Ok(score)
}

fn vendor_lock_in(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    // Dominant providers pull teams into proprietary services.
    if a.number("marketShare")?.unwrap_or(0.0) >= 20.0 {
        score -= 15.0;
    }
    if a.is_set("openStandards")? {
        score += 15.0;
    }
    if a.is_set("managedKubernetes")? {
        score += 10.0;
    }
    Ok(score)
}

fn maintainability(a: &Attributes) -> Result<f64, ScoringError> {
    let enterprise = a.count("enterpriseFeatures")?.unwrap_or(0.0);
    let certifications = a.count("certifications")?.unwrap_or(0.0);
    Ok(NEUTRAL_SCORE + (enterprise * 2.0).min(20.0) + certifications.min(10.0))
}

fn known_platforms() -> Vec<KnownTechnology> {
    vec![
        KnownTechnology {
            name: "AWS",
            aliases: &["amazon web services"],
            attributes: attributes! {
                "pricingModel" => "pay-as-you-go",
                "costTier" => "high",
                "freeTier" => true,
                "serviceCount" => 200,
                "regionCount" => 30,
                "marketShare" => 32,
                "autoScaling" => true,
                "learningCurve" => "steep",
                "documentation" => "excellent",
                "openStandards" => false,
                "managedKubernetes" => true,
                "enterpriseFeatures" => 15,
                "certifications" => 12,
            },
        },
        KnownTechnology {
            name: "Azure",
            aliases: &["microsoft azure"],
            attributes: attributes! {
                "pricingModel" => "pay-as-you-go",
                "costTier" => "high",
                "freeTier" => true,
                "serviceCount" => 200,
                "regionCount" => 60,
                "marketShare" => 23,
                "autoScaling" => true,
                "learningCurve" => "steep",
                "documentation" => "good",
                "openStandards" => false,
                "managedKubernetes" => true,
                "enterpriseFeatures" => 15,
                "certifications" => 14,
            },
        },
        KnownTechnology {
            name: "Google Cloud",
            aliases: &["gcp", "google cloud platform"],
            attributes: attributes! {
                "pricingModel" => "pay-as-you-go",
                "costTier" => "medium",
                "freeTier" => true,
                "serviceCount" => 150,
                "regionCount" => 40,
                "marketShare" => 11,
                "autoScaling" => true,
                "learningCurve" => "moderate",
                "documentation" => "good",
                "openStandards" => true,
                "managedKubernetes" => true,
                "enterpriseFeatures" => 10,
                "certifications" => 10,
            },
        },
        KnownTechnology {
            name: "DigitalOcean",
            aliases: &["digital ocean"],
            attributes: attributes! {
                "pricingModel" => "pay-as-you-go",
                "costTier" => "low",
                "freeTier" => false,
                "serviceCount" => 20,
                "regionCount" => 14,
                "marketShare" => 3,
                "autoScaling" => true,
                "learningCurve" => "easy",
                "documentation" => "excellent",
                "openStandards" => true,
                "managedKubernetes" => true,
                "enterpriseFeatures" => 3,
                "certifications" => 2,
            },
        },
        KnownTechnology {
            name: "Heroku",
            aliases: &[],
            attributes: attributes! {
                "pricingModel" => "subscription",
                "costTier" => "medium",
                "freeTier" => false,
                "serviceCount" => 10,
                "regionCount" => 6,
                "marketShare" => 1,
                "autoScaling" => true,
                "learningCurve" => "easy",
                "documentation" => "excellent",
                "openStandards" => false,
                "managedKubernetes" => false,
                "enterpriseFeatures" => 4,
                "certifications" => 4,
            },
        },
        KnownTechnology {
            name: "Linode",
            aliases: &["akamai cloud"],
            attributes: attributes! {
                "pricingModel" => "pay-as-you-go",
                "costTier" => "low",
                "freeTier" => false,
                "serviceCount" => 15,
                "regionCount" => 11,
                "marketShare" => 1,
                "autoScaling" => false,
                "learningCurve" => "easy",
                "documentation" => "good",
                "openStandards" => true,
                "managedKubernetes" => true,
                "enterpriseFeatures" => 2,
                "certifications" => 3,
            },
        },
    ]
}
