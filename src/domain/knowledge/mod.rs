//! Knowledge Module - Domain knowledge that turns attributes into scores.
//!
//! The registry is a table keyed by `Category`. Each entry holds an ordered
//! list of criterion scoring functions, conditional adjustment rules, the
//! defaults used for unrecognized technologies, and a short list of known
//! technologies with first-hand attributes.
//!
//! # Components
//!
//! - `KnowledgeRegistry` - category → `CategoryProfile` lookup with a neutral fallback
//! - `OptionNormalizer` - completes option attributes before scoring
//! - `cloud`, `backend`, `database` - the built-in profiles
//!
//! Scoring functions are plain `fn` pointers over `Attributes`. A function
//! that fails degrades to the neutral score instead of aborting evaluation.

#[macro_use]
mod macros;

mod backend;
mod cloud;
mod database;
mod fallback;
mod normalizer;
mod registry;

pub use normalizer::{NormalizedOption, OptionNormalizer};
pub use registry::{
    BaseScores, CategoryProfile, CriterionDef, KnowledgeRegistry, KnownTechnology, RulePredicate,
    ScoringFn, ScoringRule,
};
