use serde_json::json;

use medrep_form_spec::{
    Control, FieldKind, FormEngine, RenderStatus, TemporalKind, catalog, control_for,
    render_json_ui, render_text,
};

#[test]
fn every_kind_has_a_control() {
    for kind in FieldKind::ALL {
        let control = control_for(kind);
        match kind {
            FieldKind::Textarea => assert_eq!(control, Control::TextArea),
            FieldKind::Select => assert_eq!(control, Control::Select),
            FieldKind::Checkbox => assert_eq!(control, Control::Checkbox),
            FieldKind::Radio => assert_eq!(control, Control::RadioGroup),
            FieldKind::Date => assert_eq!(control, Control::Temporal(TemporalKind::Date)),
            FieldKind::Time => assert_eq!(control, Control::Temporal(TemporalKind::Time)),
            FieldKind::Datetime => {
                assert_eq!(control, Control::Temporal(TemporalKind::DateTime))
            }
            FieldKind::Other => assert_eq!(control, Control::Input { input_type: "text" }),
            other => assert_eq!(
                control,
                Control::Input {
                    input_type: other.as_str()
                }
            ),
        }
    }
}

#[test]
fn render_json_ui_exposes_structure() {
    let schema = catalog::hcp_contact().expect("hcp schema");
    let engine = FormEngine::new(schema, None);
    let ui = render_json_ui(&engine.render_payload());

    assert_eq!(ui["form_id"], "hcp-contact");
    assert_eq!(ui["status"], "idle");
    assert_eq!(ui["submit"]["label"], "Save HCP");
    assert_eq!(ui["submit"]["enabled"], true);
    assert_eq!(ui["layout"]["kind"], "grid");
    assert_eq!(ui["layout"]["columns"], 2);

    let fields = ui["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 10);
    assert_eq!(fields[0]["name"], "firstName");
    assert_eq!(fields[0]["control"], "input");
    assert_eq!(fields[2]["input_type"], "email");
    assert_eq!(fields[7]["input_type"], "date");
    assert_eq!(fields[8]["control"], "textarea");
}

#[test]
fn radio_group_renders_one_control_per_option() {
    let schema = catalog::hcp_contact().expect("hcp schema");
    let engine = FormEngine::new(schema, None);
    let ui = render_json_ui(&engine.render_payload());

    let radio = ui["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .find(|field| field["name"] == "preferredContact")
        .expect("radio field");
    assert_eq!(radio["control"], "radio_group");
    let options = radio["options"].as_array().expect("radio options");
    assert_eq!(options.len(), 3);
    assert!(options.iter().all(|option| option["name"] == "preferredContact"));
    assert_eq!(options[0]["checked"], true);
    assert_eq!(options[1]["checked"], false);
}

#[test]
fn select_without_options_renders_empty_choice_list() {
    let schema = serde_json::from_value(json!({
        "id": "loose",
        "fields": [
            { "name": "territory", "label": "Territory", "type": "select" }
        ]
    }))
    .expect("deserialize");
    let engine = FormEngine::new(schema, None);
    let ui = render_json_ui(&engine.render_payload());
    assert_eq!(ui["fields"][0]["options"], json!([]));
}

#[test]
fn errors_appear_after_validation() {
    let schema = catalog::hcp_contact().expect("hcp schema");
    let mut engine = FormEngine::new(schema, None);
    assert!(!engine.validate_form());

    let payload = engine.render_payload();
    assert_eq!(payload.status, RenderStatus::Idle);
    let first = &payload.fields[0];
    assert_eq!(first.error.as_deref(), Some("First Name is required"));

    let text = render_text(&payload);
    assert!(text.contains("Form: Add Healthcare Provider (hcp-contact)"));
    assert!(text.contains("! First Name is required"));
    assert!(text.contains("[Save HCP]"));
}

#[test]
fn render_text_shows_defaults() {
    let schema = catalog::account_settings().expect("settings schema");
    let engine = FormEngine::new(schema, None);
    let text = render_text(&engine.render_payload());
    assert!(text.contains("Session Timeout (sessionTimeout, number) = 30"));
    assert!(text.contains("options: light, dark, system"));
}
