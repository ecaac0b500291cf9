use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::{FieldDescriptor, FieldErrors, FieldValues, FormSchema};

/// Outcome of a stateless whole-form check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default)]
    pub errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_fields: Vec<String>,
}

/// Validates every declared field of `schema` against `values`.
pub fn validate_values(schema: &FormSchema, values: &FieldValues) -> ValidationReport {
    let errors = collect_errors(schema, values);

    let unknown_fields: Vec<String> = values
        .keys()
        .filter(|key| schema.field(key).is_none())
        .cloned()
        .collect();

    ValidationReport {
        valid: errors.is_empty() && unknown_fields.is_empty(),
        errors,
        unknown_fields,
    }
}

pub(crate) fn collect_errors(schema: &FormSchema, values: &FieldValues) -> FieldErrors {
    schema
        .fields
        .iter()
        .filter_map(|field| {
            let value = resolve_value(field, values);
            validate_field(field, &value).map(|message| (field.name.clone(), message))
        })
        .collect()
}

/// Current value of `field`, falling back to its default and then to the
/// empty value for its kind.
pub fn resolve_value(field: &FieldDescriptor, values: &FieldValues) -> Value {
    values
        .get(&field.name)
        .filter(|value| !value.is_null())
        .or(field.default_value.as_ref())
        .cloned()
        .unwrap_or_else(|| field.kind.empty_value())
}

/// Returns the first failing rule's message, or `None` when the value passes.
pub fn validate_field(field: &FieldDescriptor, value: &Value) -> Option<String> {
    let empty = is_empty(value);
    if field.required && empty {
        return Some(format!("{} is required", field.label));
    }
    if empty {
        return None;
    }

    let rules = field.rules()?;

    if let Some(pattern) = &rules.pattern
        && let Some(text) = pattern_subject(value)
        && let Ok(regex) = full_match(pattern)
        && !regex.is_match(&text)
    {
        return Some(format!("{} format is invalid", field.label));
    }

    if let Some(min) = rules.min
        && let Some(number) = numeric(value)
        && number < min
    {
        return Some(format!(
            "{} must be at least {}",
            field.label,
            format_number(min)
        ));
    }

    if let Some(max) = rules.max
        && let Some(number) = numeric(value)
        && number > max
    {
        return Some(format!(
            "{} must be at most {}",
            field.label,
            format_number(max)
        ));
    }

    if let Some(min_length) = rules.min_length
        && let Some(text) = value.as_str()
        && text.chars().count() < min_length
    {
        return Some(format!(
            "{} must be at least {} characters",
            field.label, min_length
        ));
    }

    if let Some(max_length) = rules.max_length
        && let Some(text) = value.as_str()
        && text.chars().count() > max_length
    {
        return Some(format!(
            "{} must be at most {} characters",
            field.label, max_length
        ));
    }

    None
}

/// `null`, `""`, an unchecked box and an empty list count as no input.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Bool(flag) => !flag,
        Value::Array(items) => items.is_empty(),
        Value::Number(_) | Value::Object(_) => false,
    }
}

/// Compiles `pattern` so that it must match the whole value.
pub fn full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

fn pattern_subject(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Renders `5.0` as `5` and keeps fractional bounds as written.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
