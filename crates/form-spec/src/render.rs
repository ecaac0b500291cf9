use serde_json::{Map, Value, json};

use crate::{
    engine::SubmissionState,
    spec::{FieldErrors, FieldKind, FieldOption, FieldValues, FormLayout, FormSchema},
    validate::resolve_value,
};

/// Native temporal widget flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    Time,
    DateTime,
}

impl TemporalKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::DateTime => "datetime-local",
        }
    }
}

/// Control a field kind is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Single-line input; `input_type` is the HTML input type hint.
    Input { input_type: &'static str },
    TextArea,
    Select,
    Checkbox,
    RadioGroup,
    Temporal(TemporalKind),
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Input { .. } => "input",
            Control::TextArea => "textarea",
            Control::Select => "select",
            Control::Checkbox => "checkbox",
            Control::RadioGroup => "radio_group",
            Control::Temporal(_) => "temporal",
        }
    }
}

/// Maps a field kind onto its control.
pub fn control_for(kind: FieldKind) -> Control {
    match kind {
        FieldKind::Textarea => Control::TextArea,
        FieldKind::Select => Control::Select,
        FieldKind::Checkbox => Control::Checkbox,
        FieldKind::Radio => Control::RadioGroup,
        FieldKind::Date => Control::Temporal(TemporalKind::Date),
        FieldKind::Time => Control::Temporal(TemporalKind::Time),
        FieldKind::Datetime => Control::Temporal(TemporalKind::DateTime),
        FieldKind::Text => Control::Input { input_type: "text" },
        FieldKind::Email => Control::Input { input_type: "email" },
        FieldKind::Password => Control::Input {
            input_type: "password",
        },
        FieldKind::Number => Control::Input {
            input_type: "number",
        },
        FieldKind::Tel => Control::Input { input_type: "tel" },
        FieldKind::Url => Control::Input { input_type: "url" },
        FieldKind::Other => Control::Input { input_type: "text" },
    }
}

/// Status labels returned by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Idle,
    Submitting,
    Failed,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::Idle => "idle",
            RenderStatus::Submitting => "submitting",
            RenderStatus::Failed => "failed",
        }
    }
}

impl From<&SubmissionState> for RenderStatus {
    fn from(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => RenderStatus::Idle,
            SubmissionState::Submitting => RenderStatus::Submitting,
            SubmissionState::Failed { .. } => RenderStatus::Failed,
        }
    }
}

/// Describes a single field for render outputs.
#[derive(Debug, Clone)]
pub struct RenderField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub control: Control,
    pub required: bool,
    pub disabled: bool,
    pub placeholder: Option<String>,
    pub help: Option<String>,
    pub style: Option<String>,
    pub value: Value,
    pub error: Option<String>,
    pub options: Vec<FieldOption>,
}

/// Collected payload used by both text and JSON renderers.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub form_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub submit_label: String,
    pub layout: FormLayout,
    pub status: RenderStatus,
    pub failure: Option<String>,
    pub submit_enabled: bool,
    pub fields: Vec<RenderField>,
}

/// Build the renderer payload from the schema and the current form state.
pub fn build_render_payload(
    schema: &FormSchema,
    values: &FieldValues,
    errors: &FieldErrors,
    state: &SubmissionState,
) -> RenderPayload {
    let fields = schema
        .fields
        .iter()
        .map(|field| RenderField {
            name: field.name.clone(),
            label: field.label.clone(),
            kind: field.kind,
            control: control_for(field.kind),
            required: field.required,
            disabled: field.disabled,
            placeholder: field.placeholder.clone(),
            help: field.help_text.clone(),
            style: field.style_override.clone(),
            value: resolve_value(field, values),
            error: errors.get(&field.name).cloned(),
            options: field.options.clone(),
        })
        .collect::<Vec<_>>();

    let status = RenderStatus::from(state);
    let failure = match state {
        SubmissionState::Failed { message } => Some(message.clone()),
        _ => None,
    };

    RenderPayload {
        form_id: schema.id.clone(),
        title: schema.title.clone(),
        description: schema.description.clone(),
        submit_label: schema.submit_label.clone(),
        layout: schema.layout,
        status,
        failure,
        submit_enabled: status != RenderStatus::Submitting,
        fields,
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let fields = payload.fields.iter().map(field_json).collect::<Vec<_>>();

    let mut layout = Map::new();
    layout.insert(
        "kind".into(),
        Value::String(payload.layout.kind.as_str().to_string()),
    );
    if let Some(columns) = payload.layout.columns {
        layout.insert("columns".into(), json!(columns));
    }

    json!({
        "form_id": payload.form_id,
        "title": payload.title,
        "description": payload.description,
        "status": payload.status.as_str(),
        "failure": payload.failure,
        "layout": Value::Object(layout),
        "fields": fields,
        "submit": {
            "label": payload.submit_label,
            "enabled": payload.submit_enabled,
        },
    })
}

fn field_json(field: &RenderField) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), Value::String(field.name.clone()));
    map.insert("label".into(), Value::String(field.label.clone()));
    map.insert("type".into(), Value::String(field.kind.as_str().to_string()));
    map.insert(
        "control".into(),
        Value::String(field.control.as_str().to_string()),
    );
    map.insert("required".into(), Value::Bool(field.required));
    map.insert("disabled".into(), Value::Bool(field.disabled));
    map.insert("value".into(), field.value.clone());
    if let Some(placeholder) = &field.placeholder {
        map.insert("placeholder".into(), Value::String(placeholder.clone()));
    }
    if let Some(help) = &field.help {
        map.insert("help".into(), Value::String(help.clone()));
    }
    if let Some(style) = &field.style {
        map.insert("style".into(), Value::String(style.clone()));
    }
    if let Some(error) = &field.error {
        map.insert("error".into(), Value::String(error.clone()));
    }

    match field.control {
        Control::Input { input_type } => {
            map.insert("input_type".into(), Value::String(input_type.to_string()));
        }
        Control::Temporal(kind) => {
            map.insert(
                "input_type".into(),
                Value::String(kind.input_type().to_string()),
            );
        }
        Control::Select => {
            let options = field
                .options
                .iter()
                .map(|option| {
                    json!({
                        "value": option.value,
                        "label": option.label,
                        "selected": field.value.as_str() == Some(option.value.as_str()),
                    })
                })
                .collect::<Vec<_>>();
            map.insert("options".into(), Value::Array(options));
        }
        Control::RadioGroup => {
            let controls = field
                .options
                .iter()
                .map(|option| {
                    json!({
                        "name": field.name,
                        "value": option.value,
                        "label": option.label,
                        "checked": field.value.as_str() == Some(option.value.as_str()),
                    })
                })
                .collect::<Vec<_>>();
            map.insert("options".into(), Value::Array(controls));
        }
        Control::Checkbox => {
            map.insert(
                "checked".into(),
                Value::Bool(field.value.as_bool().unwrap_or(false)),
            );
        }
        Control::TextArea => {}
    }

    Value::Object(map)
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    match &payload.title {
        Some(title) => lines.push(format!("Form: {} ({})", title, payload.form_id)),
        None => lines.push(format!("Form: {}", payload.form_id)),
    }
    if let Some(description) = &payload.description {
        lines.push(description.clone());
    }
    lines.push(format!("Status: {}", payload.status.as_str()));
    if let Some(failure) = &payload.failure {
        lines.push(format!("Submission failed: {}", failure));
    }

    lines.push("Fields:".to_string());
    for field in &payload.fields {
        let mut entry = format!(" - {} ({}, {})", field.label, field.name, field.kind.as_str());
        if field.required {
            entry.push_str(" [required]");
        }
        if field.disabled {
            entry.push_str(" [disabled]");
        }
        let display = value_to_display(&field.value);
        if !display.is_empty() {
            entry.push_str(&format!(" = {}", display));
        }
        lines.push(entry);
        if field.kind.is_choice() && !field.options.is_empty() {
            let choices = field
                .options
                .iter()
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>();
            lines.push(format!("   options: {}", choices.join(", ")));
        }
        if let Some(error) = &field.error {
            lines.push(format!("   ! {}", error));
        }
    }

    let mut submit = format!("[{}]", payload.submit_label);
    if !payload.submit_enabled {
        submit.push_str(" (disabled)");
    }
    lines.push(submit);

    lines.join("\n")
}

pub(crate) fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(num) => num.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
