//! Options Module - The inputs to an evaluation.
//!
//! `TechnicalOption` records and `UserConstraints` arrive already collected
//! by the intake layer; `InputValidator` performs the structural checks the
//! evaluation relies on.

mod constraints;
mod option;
mod validation;

pub use constraints::{
    Budget, Priorities, Scale, SkillLevel, Team, Timeline, Traffic, UserConstraints,
    DEFAULT_PRIORITY, LARGE_SCALE_USERS, MAX_PRIORITY, MIN_PRIORITY,
};
pub use option::{AttributeValue, Attributes, Category, OptionKey, TechnicalOption};
pub use validation::{InputValidator, MAX_OPTIONS, MIN_OPTIONS};
