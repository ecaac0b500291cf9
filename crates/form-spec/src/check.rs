use std::collections::BTreeSet;

use thiserror::Error;

use crate::spec::FormSchema;
use crate::validate::full_match;

/// Structural problems in a form schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("field #{index} has an empty name")]
    EmptyFieldName { index: usize },
    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },
    #[error("choice field '{name}' has no options")]
    MissingOptions { name: String },
    #[error("field '{name}' has an invalid pattern: {reason}")]
    InvalidPattern { name: String, reason: String },
    #[error("field '{name}' has a lower bound above its upper bound")]
    InvertedRange { name: String },
}

/// Fails on the first issue reported by [`schema_issues`].
pub fn check_schema(schema: &FormSchema) -> Result<(), SchemaError> {
    match schema_issues(schema).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Lists every structural issue, in field order.
pub fn schema_issues(schema: &FormSchema) -> Vec<SchemaError> {
    let mut issues = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, field) in schema.fields.iter().enumerate() {
        if field.name.trim().is_empty() {
            issues.push(SchemaError::EmptyFieldName { index });
            continue;
        }
        if !seen.insert(field.name.as_str()) {
            issues.push(SchemaError::DuplicateField {
                name: field.name.clone(),
            });
        }
        if field.kind.is_choice() && field.options.is_empty() {
            issues.push(SchemaError::MissingOptions {
                name: field.name.clone(),
            });
        }

        let Some(rules) = field.rules() else {
            continue;
        };
        if let Some(pattern) = &rules.pattern
            && let Err(err) = full_match(pattern)
        {
            issues.push(SchemaError::InvalidPattern {
                name: field.name.clone(),
                reason: err.to_string(),
            });
        }
        let numeric_inverted = matches!((rules.min, rules.max), (Some(min), Some(max)) if min > max);
        let length_inverted =
            matches!((rules.min_length, rules.max_length), (Some(min), Some(max)) if min > max);
        if numeric_inverted || length_inverted {
            issues.push(SchemaError::InvertedRange {
                name: field.name.clone(),
            });
        }
    }

    issues
}
