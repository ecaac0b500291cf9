use serde_json::{Map, Value, json};

use crate::spec::{FieldDescriptor, FieldKind, FormSchema};

/// JSON Schema describing the values object a form submits.
pub fn generate(schema: &FormSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &schema.fields {
        properties.insert(field.name.clone(), field_schema(field));
        if field.required {
            required.push(Value::String(field.name.clone()));
        }
    }

    let mut root = Map::new();
    root.insert(
        "$schema".into(),
        Value::String("https://json-schema.org/draft/2020-12/schema".into()),
    );
    if !schema.id.is_empty() {
        root.insert("$id".into(), Value::String(format!("{}.values", schema.id)));
    }
    if let Some(title) = &schema.title {
        root.insert("title".into(), Value::String(title.clone()));
    }
    root.insert("type".into(), Value::String("object".into()));
    root.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        root.insert("required".into(), Value::Array(required));
    }
    root.insert("additionalProperties".into(), Value::Bool(false));

    Value::Object(root)
}

/// Optional fields also accept `""` and `null`; rules only bind non-empty values.
fn field_schema(field: &FieldDescriptor) -> Value {
    let mut map = Map::new();
    map.insert("title".into(), Value::String(field.label.clone()));
    if let Some(help) = &field.help_text {
        map.insert("description".into(), Value::String(help.clone()));
    }

    let rules = rule_schema(field);
    if field.required || field.kind == FieldKind::Checkbox {
        map.extend(rules);
    } else {
        map.insert(
            "anyOf".into(),
            json!([{ "enum": ["", null] }, Value::Object(rules)]),
        );
    }

    if let Some(default) = &field.default_value {
        map.insert("default".into(), default.clone());
    }

    Value::Object(map)
}

fn rule_schema(field: &FieldDescriptor) -> Map<String, Value> {
    let mut map = Map::new();

    match field.kind {
        FieldKind::Checkbox => {
            if field.required {
                map.insert("type".into(), json!("boolean"));
                map.insert("const".into(), json!(true));
            } else {
                map.insert("type".into(), json!(["boolean", "null"]));
            }
        }
        FieldKind::Number => {
            map.insert("type".into(), json!(["number", "string"]));
        }
        FieldKind::Select | FieldKind::Radio => {
            map.insert("type".into(), json!("string"));
            let values = field
                .options
                .iter()
                .map(|option| Value::String(option.value.clone()))
                .collect::<Vec<_>>();
            if !values.is_empty() {
                map.insert("enum".into(), Value::Array(values));
            }
        }
        kind => {
            map.insert("type".into(), json!("string"));
            if let Some(format) = string_format(kind) {
                map.insert("format".into(), json!(format));
            }
        }
    }

    let rules = field.rules();
    if let Some(pattern) = rules.and_then(|rules| rules.pattern.as_ref()) {
        map.insert("pattern".into(), Value::String(format!("^(?:{})$", pattern)));
    }
    if let Some(min) = rules.and_then(|rules| rules.min) {
        map.insert("minimum".into(), json!(min));
    }
    if let Some(max) = rules.and_then(|rules| rules.max) {
        map.insert("maximum".into(), json!(max));
    }

    // minLength only constrains strings, so it also rejects "" for required numbers.
    let min_length = rules.and_then(|rules| rules.min_length);
    let min_length = if field.required && field.kind != FieldKind::Checkbox {
        Some(min_length.unwrap_or(0).max(1))
    } else {
        min_length
    };
    if let Some(min_length) = min_length {
        map.insert("minLength".into(), json!(min_length));
    }
    if let Some(max_length) = rules.and_then(|rules| rules.max_length) {
        map.insert("maxLength".into(), json!(max_length));
    }

    map
}

/// Time widgets post `HH:MM`, which the RFC 3339 `time` and `date-time`
/// formats reject.
fn string_format(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Email => Some("email"),
        FieldKind::Url => Some("uri"),
        FieldKind::Date => Some("date"),
        _ => None,
    }
}
