//! Backend framework and runtime knowledge.

use crate::domain::foundation::{Criterion, ScoringError, NEUTRAL_SCORE};
use crate::domain::options::Attributes;

use super::registry::{
    learning_tier_bonus, size_bonus, CategoryProfile, CriterionDef, KnownTechnology, ScoringRule,
};

const REQUIRED_FIELDS: &[&str] = &["language", "performanceTier", "learningCurve", "openSource"];

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
                name: "async concurrency",
                applies: |a| a.text_is("concurrencyModel", "async"),
                adjustment: 5.0,
                affected: &[Criterion::Performance, Criterion::Scalability],
            },
            ScoringRule {
                name: "large community",
                applies: |a| a.text_is("communitySize", "large"),
                adjustment: 5.0,
                affected: &[Criterion::LearningCurve],
            },
            ScoringRule {
                name: "static typing",
                applies: |a| a.is_set("typeSafety"),
                adjustment: 5.0,
                affected: &[Criterion::Maintainability],
            },
        ],
        defaults: attributes! {
            "performanceTier" => "medium",
            "learningCurve" => "moderate",
            "openSource" => true,
            "communitySize" => "medium",
            "concurrencyModel" => "threaded",
        },
        required_fields: REQUIRED_FIELDS,
        known: known_frameworks(),
    }
}

fn performance_tier_bonus(a: &Attributes, high: f64, medium: f64, low: f64) -> Result<f64, ScoringError> {
    Ok(if a.text_is("performanceTier", "high")? {
        high
    } else if a.text_is("performanceTier", "medium")? {
        medium
    } else if a.text_is("performanceTier", "low")? {
        low
    } else {
        0.0
    })
}

fn cost(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.is_set("openSource")? {
        score += 20.0;
    }
    if let Some(license) = a.number("licenseCost")? {
        if license < 0.0 {
            return Err(ScoringError::invalid_value("licenseCost", "cannot be negative"));
        }
        score -= (license / 1000.0).min(30.0);
    }
    if a.text_is("resourceFootprint", "light")? {
        score += 10.0;
    } else if a.text_is("resourceFootprint", "heavy")? {
        score -= 10.0;
    }
    Ok(score)
}

fn performance(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE + performance_tier_bonus(a, 30.0, 10.0, -10.0)?;
    if a.text_is("concurrencyModel", "async")? {
        score += 10.0;
    } else if a.text_is("concurrencyModel", "threaded")? {
        score += 5.0;
    }
    Ok(score)
}

fn scalability(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE + performance_tier_bonus(a, 10.0, 0.0, 0.0)?;
    if a.is_set("horizontalScaling")? {
        score += 20.0;
    }
    Ok(score)
}

fn learning_curve(a: &Attributes) -> Result<f64, ScoringError> {
    Ok(NEUTRAL_SCORE + learning_tier_bonus(a)? + size_bonus(a, "communitySize", 10.0, 5.0)?)
}

fn vendor_lock_in(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.is_set("openSource")? {
        score += 25.0;
    }
    score += (a.count("hostingOptions")?.unwrap_or(0.0) * 3.0).min(15.0);
    Ok(score)
}

fn maintainability(a: &Attributes) -> Result<f64, ScoringError> {
    let mut score = NEUTRAL_SCORE;
    if a.is_set("typeSafety")? {
        score += 15.0;
    }
    score += (a.number("maturityYears")?.unwrap_or(0.0) * 2.0).min(20.0);
    score += size_bonus(a, "communitySize", 10.0, 0.0)?;
    Ok(score)
}

fn known_frameworks() -> Vec<KnownTechnology> {
    vec![
        KnownTechnology {
            name: "Node.js",
            aliases: &["node", "nodejs"],
            attributes: attributes! {
                "language" => "javascript",
                "performanceTier" => "medium",
                "concurrencyModel" => "async",
                "horizontalScaling" => true,
                "learningCurve" => "easy",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 10,
                "typeSafety" => false,
                "maturityYears" => 15,
                "resourceFootprint" => "light",
            },
        },
        KnownTechnology {
            name: "Express",
            aliases: &["express.js", "expressjs"],
            attributes: attributes! {
                "language" => "javascript",
                "performanceTier" => "medium",
                "concurrencyModel" => "async",
                "horizontalScaling" => true,
                "learningCurve" => "easy",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 10,
                "typeSafety" => false,
                "maturityYears" => 14,
                "resourceFootprint" => "light",
            },
        },
        KnownTechnology {
            name: "Django",
            aliases: &[],
            attributes: attributes! {
                "language" => "python",
                "performanceTier" => "low",
                "concurrencyModel" => "threaded",
                "horizontalScaling" => true,
                "learningCurve" => "moderate",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 8,
                "typeSafety" => false,
                "maturityYears" => 18,
                "resourceFootprint" => "medium",
            },
        },
        KnownTechnology {
            name: "FastAPI",
            aliases: &[],
            attributes: attributes! {
                "language" => "python",
                "performanceTier" => "medium",
                "concurrencyModel" => "async",
                "horizontalScaling" => true,
                "learningCurve" => "easy",
                "communitySize" => "medium",
                "openSource" => true,
                "hostingOptions" => 8,
                "typeSafety" => true,
                "maturityYears" => 6,
                "resourceFootprint" => "light",
            },
        },
        KnownTechnology {
            name: "Spring Boot",
            aliases: &["spring"],
            attributes: attributes! {
                "language" => "java",
                "performanceTier" => "high",
                "concurrencyModel" => "threaded",
                "horizontalScaling" => true,
                "learningCurve" => "steep",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 10,
                "typeSafety" => true,
                "maturityYears" => 11,
                "resourceFootprint" => "heavy",
            },
        },
        KnownTechnology {
            name: "Ruby on Rails",
            aliases: &["rails"],
            attributes: attributes! {
                "language" => "ruby",
                "performanceTier" => "low",
                "concurrencyModel" => "threaded",
                "horizontalScaling" => true,
                "learningCurve" => "moderate",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 6,
                "typeSafety" => false,
                "maturityYears" => 20,
                "resourceFootprint" => "heavy",
            },
        },
        KnownTechnology {
            name: "Go",
            aliases: &["golang"],
            attributes: attributes! {
                "language" => "go",
                "performanceTier" => "high",
                "concurrencyModel" => "async",
                "horizontalScaling" => true,
                "learningCurve" => "moderate",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 10,
                "typeSafety" => true,
                "maturityYears" => 14,
                "resourceFootprint" => "light",
            },
        },
        KnownTechnology {
            name: "ASP.NET Core",
            aliases: &["asp.net", ".net", "dotnet"],
            attributes: attributes! {
                "language" => "csharp",
                "performanceTier" => "high",
                "concurrencyModel" => "async",
                "horizontalScaling" => true,
                "learningCurve" => "moderate",
                "communitySize" => "large",
                "openSource" => true,
                "hostingOptions" => 6,
                "typeSafety" => true,
                "maturityYears" => 9,
                "resourceFootprint" => "medium",
            },
        },
    ]
}
