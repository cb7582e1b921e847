//! Application layer - Validated entry points over the domain services.

mod decision_engine;

pub use decision_engine::{DecisionEngine, EvaluateOptionsCommand};
