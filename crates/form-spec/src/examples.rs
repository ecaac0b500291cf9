use serde_json::{Value, json};

use crate::spec::{FieldDescriptor, FieldKind, FieldValues, FormSchema};
use crate::validate::validate_field;

/// Builds a values object that passes validation where possible: defaults
/// where declared, otherwise the first sample candidate the field's rules
/// accept. Candidates are the placeholder, a per-kind sample and a generic
/// `example-<name>` string, each stretched or cut to the length bounds.
///
/// When no candidate satisfies a pattern the first one is kept, so callers
/// that need a valid object should run the result through validation.
pub fn generate(schema: &FormSchema) -> FieldValues {
    schema
        .fields
        .iter()
        .map(|field| {
            let value = field
                .default_value
                .clone()
                .unwrap_or_else(|| sample_value(field));
            (field.name.clone(), value)
        })
        .collect()
}

fn sample_value(field: &FieldDescriptor) -> Value {
    let rules = field.rules();
    match field.kind {
        FieldKind::Checkbox => Value::Bool(field.required),
        FieldKind::Number => {
            let min = rules.and_then(|rules| rules.min);
            let max = rules.and_then(|rules| rules.max);
            match (min, max) {
                (Some(min), _) => json!(min),
                (None, Some(max)) => json!(max.min(1.0)),
                (None, None) => json!(1),
            }
        }
        FieldKind::Select | FieldKind::Radio => field
            .options
            .first()
            .map(|option| Value::String(option.value.clone()))
            .unwrap_or_else(|| Value::String(String::new())),
        _ => {
            let candidates = text_candidates(field)
                .into_iter()
                .map(|text| Value::String(fit_length(field, text)))
                .collect::<Vec<_>>();
            candidates
                .iter()
                .find(|candidate| validate_field(field, candidate).is_none())
                .or_else(|| candidates.first())
                .cloned()
                .unwrap_or_else(|| field.kind.empty_value())
        }
    }
}

fn text_candidates(field: &FieldDescriptor) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(placeholder) = field
        .placeholder
        .as_deref()
        .filter(|placeholder| !placeholder.trim().is_empty())
    {
        candidates.push(placeholder.to_string());
    }
    let kind_sample = match field.kind {
        FieldKind::Email => Some("rep@example.com"),
        FieldKind::Tel => Some("+1 555 0100"),
        FieldKind::Url => Some("https://example.com"),
        FieldKind::Date => Some("2024-01-15"),
        FieldKind::Time => Some("09:00"),
        FieldKind::Datetime => Some("2024-01-15T09:00"),
        FieldKind::Password => Some("correct-horse-battery"),
        _ => None,
    };
    candidates.extend(kind_sample.map(str::to_string));
    candidates.push(format!("example-{}", field.name));
    candidates
}

fn fit_length(field: &FieldDescriptor, mut text: String) -> String {
    if let Some(rules) = field.rules() {
        if let Some(min_length) = rules.min_length {
            while text.chars().count() < min_length {
                text.push('x');
            }
        }
        if let Some(max_length) = rules.max_length {
            text = text.chars().take(max_length).collect();
        }
    }
    text
}
