use futures::executor::block_on;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::debug;

use medrep_form_spec::{
    EngineError, FieldValues, FormEngine, FormSchema, HandlerError, RenderPayload, SubmitOutcome,
    catalog, render_json_ui as spec_render_json_ui, render_text as spec_render_text,
    validate_values as spec_validate_values, values_schema,
};

#[derive(Debug, Error)]
enum HostError {
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("failed to parse values: {0}")]
    ValuesParse(#[source] serde_json::Error),
    #[error("form '{0}' is not available")]
    FormUnavailable(String),
    #[error("json encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("submission failed: {0}")]
    Submit(#[from] HandlerError),
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct HostConfig {
    #[serde(default)]
    form_schema_json: Option<String>,
}

fn load_form_schema(config_json: &str) -> Result<FormSchema, HostError> {
    let config = if config_json.trim().is_empty() {
        HostConfig::default()
    } else {
        serde_json::from_str(config_json).map_err(HostError::ConfigParse)?
    };

    let schema_json = config
        .form_schema_json
        .as_deref()
        .unwrap_or(catalog::HCP_CONTACT_JSON);

    serde_json::from_str(schema_json).map_err(HostError::ConfigParse)
}

fn ensure_form(form_id: &str, config_json: &str) -> Result<FormSchema, HostError> {
    let schema = load_form_schema(config_json)?;
    if schema.id != form_id {
        Err(HostError::FormUnavailable(form_id.to_string()))
    } else {
        Ok(schema)
    }
}

/// Blank input means no values yet; anything else must be a JSON object.
fn parse_values(values_json: &str) -> Result<FieldValues, HostError> {
    if values_json.trim().is_empty() {
        return Ok(Map::new());
    }
    serde_json::from_str(values_json).map_err(HostError::ValuesParse)
}

fn respond(result: Result<Value, HostError>) -> String {
    match result {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|error| {
            json!({"error": format!("json encode: {}", error)}).to_string()
        }),
        Err(err) => json!({ "error": err.to_string() }).to_string(),
    }
}

fn respond_string(result: Result<String, HostError>) -> String {
    match result {
        Ok(value) => value,
        Err(err) => json!({ "error": err.to_string() }).to_string(),
    }
}

pub fn describe(form_id: &str, config_json: &str) -> String {
    respond(
        ensure_form(form_id, config_json)
            .and_then(|schema| serde_json::to_value(schema).map_err(HostError::JsonEncode)),
    )
}

pub fn get_values_schema(form_id: &str, config_json: &str) -> String {
    respond(ensure_form(form_id, config_json).map(|schema| values_schema(&schema)))
}

pub fn validate_values(form_id: &str, config_json: &str, values_json: &str) -> String {
    respond(ensure_form(form_id, config_json).and_then(|schema| {
        let values = parse_values(values_json)?;
        serde_json::to_value(spec_validate_values(&schema, &values))
            .map_err(HostError::JsonEncode)
    }))
}

fn render_payload(
    form_id: &str,
    config_json: &str,
    values_json: &str,
) -> Result<RenderPayload, HostError> {
    let schema = ensure_form(form_id, config_json)?;
    let values = parse_values(values_json)?;
    Ok(FormEngine::new(schema, Some(&values)).render_payload())
}

pub fn render_json_ui(form_id: &str, config_json: &str, values_json: &str) -> String {
    respond(
        render_payload(form_id, config_json, values_json)
            .map(|payload| spec_render_json_ui(&payload)),
    )
}

pub fn render_text(form_id: &str, config_json: &str, values_json: &str) -> String {
    respond_string(
        render_payload(form_id, config_json, values_json).map(|payload| spec_render_text(&payload)),
    )
}

/// Writes one field and reports that field's validation message, if any.
pub fn set_field(
    form_id: &str,
    config_json: &str,
    values_json: &str,
    name: &str,
    value_json: &str,
) -> String {
    respond(ensure_form(form_id, config_json).and_then(|schema| {
        let value: Value = serde_json::from_str(value_json).map_err(HostError::ValuesParse)?;
        let values = parse_values(values_json)?;
        let mut engine = FormEngine::new(schema, Some(&values));
        engine.set_field_value(name, value)?;
        let error = engine.validate_field(name)?;

        let mut response = Map::new();
        response.insert(
            "status".into(),
            Value::String(if error.is_some() { "error" } else { "ok" }.into()),
        );
        response.insert("values".into(), Value::Object(engine.values().clone()));
        if let Some(message) = error {
            let mut errors = Map::new();
            errors.insert(name.to_string(), Value::String(message));
            response.insert("errors".into(), Value::Object(errors));
        }
        Ok(Value::Object(response))
    }))
}

/// Validates the whole form and returns the values the page should post.
pub fn submit(form_id: &str, config_json: &str, values_json: &str) -> String {
    respond(ensure_form(form_id, config_json).and_then(|schema| {
        let values = parse_values(values_json)?;
        let mut engine = FormEngine::new(schema, Some(&values));

        match block_on(engine.submit()) {
            SubmitOutcome::Submitted(values) | SubmitOutcome::Validated(values) => {
                debug!(form = %form_id, "host submission accepted");
                Ok(json!({ "status": "submitted", "values": values }))
            }
            SubmitOutcome::Invalid(errors) => Ok(json!({
                "status": "invalid",
                "values": engine.values(),
                "errors": errors,
            })),
            SubmitOutcome::Failed(err) => Err(HostError::Submit(err)),
            SubmitOutcome::InFlight => Ok(json!({ "status": "submitting" })),
        }
    }))
}
