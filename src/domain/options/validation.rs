//! Structural validation of an evaluation request.
//!
//! Fatal problems abort before scoring. Soft problems come back as warnings.

use std::collections::HashSet;

use super::{Category, TechnicalOption, UserConstraints};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Fewest options a comparison accepts.
pub const MIN_OPTIONS: usize = 2;

/// Most options a comparison accepts.
pub const MAX_OPTIONS: usize = 3;

/// Validation of the option set and constraints.
pub struct InputValidator;

impl InputValidator {
    /// Validates options and constraints, returning non-fatal warnings.
    ///
    /// # Errors
    /// - `INVALID_OPTION_COUNT` when fewer than 2 or more than 3 options
    /// - `INVALID_OPTION` for a blank name (reason `empty_name`) or a repeated
    ///   name+category pair, name compared case-insensitively (reason `duplicate`)
    /// - `INVALID_PRIORITY` for a priority outside [1, 5]
    pub fn validate(
        options: &[TechnicalOption],
        constraints: &UserConstraints,
    ) -> Result<Vec<String>, DomainError> {
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return Err(DomainError::invalid_option_count(options.len()));
        }

        let mut seen: HashSet<(String, Category)> = HashSet::new();
        for (index, option) in options.iter().enumerate() {
            if option.name.trim().is_empty() {
                return Err(DomainError::invalid_option(
                    index,
                    "name",
                    "empty_name",
                    format!("Option {} has an empty name", index + 1),
                ));
            }

            if !seen.insert((option.lookup_name(), option.category)) {
                return Err(DomainError::invalid_option(
                    index,
                    "name",
                    "duplicate",
                    format!(
                        "Option '{}' ({}) appears more than once",
                        option.name.trim(),
                        option.category
                    ),
                )
                .with_detail("option", option.name.trim()));
            }
        }

        constraints.priorities.validate().map_err(|err| {
            DomainError::new(ErrorCode::InvalidPriority, err.to_string())
                .with_detail("field", err.field())
        })?;

        Ok(Self::collect_warnings(options))
    }

    fn collect_warnings(options: &[TechnicalOption]) -> Vec<String> {
        let mut warnings = Vec::new();

        for option in options.iter().filter(|o| o.category == Category::Unknown) {
            warnings.push(format!(
                "'{}' has an unrecognized category; it is scored neutrally",
                option.name.trim()
            ));
        }

        let categories: HashSet<Category> = options.iter().map(|o| o.category).collect();
        if categories.len() > 1 {
            let mut labels: Vec<_> = categories.iter().map(|c| c.label()).collect();
            labels.sort_unstable();
            warnings.push(format!(
                "Options span different categories ({}); scores may not be directly comparable",
                labels.join(", ")
            ));
        }

        warnings
    }
}
