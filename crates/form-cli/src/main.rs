mod export;
mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use medrep_form_host::{render_json_ui, render_text};
use medrep_form_spec::{
    FieldDescriptor, FieldKind, FieldValues, FormEngine, FormSchema, HandlerError, SubmitHandler,
    SubmitOutcome, ValidationReport, catalog, schema_issues, validate_values, values_schema,
};
use serde_json::{Number, Value, json};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wizard::{AnswerParseError, PromptContext, Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const LOG_ENV: &str = "MEDREP_LOG";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "MedRep form schema helper",
    long_about = "Checks, validates, renders and interactively fills dashboard form schemas"
)]
struct Cli {
    /// Log engine activity at debug level (overridden by MEDREP_LOG).
    #[arg(long, global = true, alias = "debug")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Report structural problems in a form schema.
    Check {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
    },
    /// Validate a values file against a form schema.
    Validate {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Path to the values JSON file.
        #[arg(long, value_name = "VALUES")]
        values: PathBuf,
    },
    /// Render the form with optional values.
    Render {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Optional JSON file containing current values.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Print the JSON Schema of the values a form submits.
    ValuesSchema {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
    },
    /// Print the JSON Schema of the form schema format itself.
    Schema,
    /// List the bundled dashboard forms, or print one of them.
    Catalog {
        /// Id of the bundled form to print.
        #[arg(long)]
        id: Option<String>,
    },
    /// Write a form, its values schema and example values to a directory.
    Export {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Root directory for the exported bundle.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
        /// Overwrite an existing bundle.
        #[arg(long)]
        force: bool,
    },
    /// Fill in a form interactively and submit it.
    Fill {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Optional JSON file containing initial values.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// Write the submitted values here instead of stdout.
        #[arg(long, value_name = "OUT")]
        out: Option<PathBuf>,
        /// Also print the JSON UI before each prompt.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Check { schema } => run_check(schema),
        Command::Validate { schema, values } => run_validate(schema, values),
        Command::Render {
            schema,
            values,
            format,
        } => run_render(schema, values, format),
        Command::ValuesSchema { schema } => run_values_schema(schema),
        Command::Schema => run_schema(),
        Command::Catalog { id } => run_catalog(id),
        Command::Export { schema, out, force } => run_export(schema, out, force),
        Command::Fill {
            schema,
            values,
            out,
            format,
        } => run_fill(schema, values, out, format, cli.verbose).await,
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_schema(path: &Path) -> CliResult<(FormSchema, String)> {
    let contents = fs::read_to_string(path)?;
    let schema: FormSchema = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), form = %schema.id, "schema loaded");
    Ok((schema, contents))
}

fn load_values(path: &Path) -> CliResult<FieldValues> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(format!("{} must contain a JSON object", path.display()).into()),
    }
}

fn run_check(schema_path: PathBuf) -> CliResult<()> {
    let (schema, _) = load_schema(&schema_path)?;
    let issues = schema_issues(&schema);
    if issues.is_empty() {
        println!("Schema OK: {} fields", schema.fields.len());
        return Ok(());
    }
    println!("Schema issues:");
    for issue in &issues {
        println!("  {}", issue);
    }
    Err(format!("{} schema issue(s) found", issues.len()).into())
}

fn run_validate(schema_path: PathBuf, values_path: PathBuf) -> CliResult<()> {
    let (schema, _) = load_schema(&schema_path)?;
    let values = load_values(&values_path)?;

    let report = validate_values(&schema, &values);
    println!(
        "Validation result: {}",
        if report.valid { "valid" } else { "invalid" }
    );
    describe_validation(&report);

    if report.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(report: &ValidationReport) {
    if !report.errors.is_empty() {
        println!("Errors:");
        for (name, message) in &report.errors {
            println!("  {} - {}", name, message);
        }
    }
    if !report.unknown_fields.is_empty() {
        println!("Unknown fields: {}", report.unknown_fields.join(", "));
    }
}

fn run_render(
    schema_path: PathBuf,
    values_path: Option<PathBuf>,
    format: RenderMode,
) -> CliResult<()> {
    let (schema, schema_json) = load_schema(&schema_path)?;
    let config_json = json!({ "form_schema_json": schema_json }).to_string();
    let values_json = match values_path {
        Some(path) => Value::Object(load_values(&path)?).to_string(),
        None => "{}".to_string(),
    };

    match format {
        RenderMode::Text => {
            let output = render_text(&schema.id, &config_json, &values_json);
            // Text rendering only yields JSON when the host reports an error.
            if output.starts_with('{') {
                parse_host_result(&output)?;
            }
            println!("{}", output);
        }
        RenderMode::Json => {
            let ui = parse_host_result(&render_json_ui(&schema.id, &config_json, &values_json))?;
            println!("{}", serde_json::to_string_pretty(&ui)?);
        }
    }
    Ok(())
}

fn parse_host_result(response: &str) -> CliResult<Value> {
    let value: Value = serde_json::from_str(response)?;
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        Err(error.into())
    } else {
        Ok(value)
    }
}

fn run_values_schema(schema_path: PathBuf) -> CliResult<()> {
    let (schema, _) = load_schema(&schema_path)?;
    println!("{}", serde_json::to_string_pretty(&values_schema(&schema))?);
    Ok(())
}

fn run_schema() -> CliResult<()> {
    let schema = schemars::schema_for!(FormSchema);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn run_catalog(id: Option<String>) -> CliResult<()> {
    match id {
        Some(id) => {
            let schema = catalog::find(&id).ok_or_else(|| format!("no bundled form '{}'", id))??;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        None => {
            for schema in catalog::all()? {
                println!(
                    "{} - {} ({} fields)",
                    schema.id,
                    schema.title.as_deref().unwrap_or("untitled"),
                    schema.fields.len()
                );
            }
        }
    }
    Ok(())
}

fn run_export(schema_path: PathBuf, out: PathBuf, force: bool) -> CliResult<()> {
    let (schema, _) = load_schema(&schema_path)?;
    if let Some(issue) = schema_issues(&schema).into_iter().next() {
        return Err(format!("refusing to export a broken schema: {}", issue).into());
    }
    let bundle = export::build_bundle(schema);
    let report = validate_values(&bundle.schema, &bundle.examples);
    if !report.valid {
        let fields = report.errors.keys().cloned().collect::<Vec<_>>();
        return Err(format!(
            "cannot build passing example values for: {} (add a matching placeholder)",
            fields.join(", ")
        )
        .into());
    }
    let bundle_dir = export::write_bundle(&bundle, &out, force)?;
    println!("Exported form bundle at {}", bundle_dir.display());
    Ok(())
}

/// Writes submitted values as pretty JSON to a file or stdout.
struct WriteValues {
    out: Option<PathBuf>,
}

impl SubmitHandler for WriteValues {
    async fn submit(&self, values: FieldValues) -> Result<(), HandlerError> {
        let contents = serde_json::to_string_pretty(&values)?;
        match &self.out {
            Some(path) => fs::write(path, contents)?,
            None => println!("{}", contents),
        }
        Ok(())
    }
}

async fn run_fill(
    schema_path: PathBuf,
    values_path: Option<PathBuf>,
    out: Option<PathBuf>,
    format: RenderMode,
    verbose: bool,
) -> CliResult<()> {
    let (schema, _) = load_schema(&schema_path)?;
    let initial = values_path.as_deref().map(load_values).transpose()?;
    let total = schema.fields.len();
    let mut pending: Vec<String> = schema.field_names().map(str::to_string).collect();

    let mut engine = FormEngine::new(schema, initial.as_ref()).with_handler(WriteValues { out });
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose));
    presenter.show_header(engine.schema());

    loop {
        for name in &pending {
            let field = engine
                .schema()
                .field(name)
                .cloned()
                .ok_or_else(|| format!("field '{}' disappeared from the form", name))?;
            let index = engine
                .schema()
                .fields
                .iter()
                .position(|candidate| candidate.name == field.name)
                .map_or(1, |position| position + 1);

            if let RenderMode::Json = format {
                let ui = medrep_form_spec::render_json_ui(&engine.render_payload());
                println!("JSON UI:\n{}", serde_json::to_string_pretty(&ui)?);
            }

            loop {
                let current = engine.value(name).cloned().unwrap_or(Value::Null);
                let prompt = PromptContext::new(&field, index, total, &current);
                let answer = prompt_field(&prompt, &field, &current, &presenter)?;
                engine.set_field_value(name, answer)?;
                match engine.validate_field(name)? {
                    Some(message) => presenter.show_field_error(&message),
                    None => break,
                }
            }
        }

        match engine.submit().await {
            SubmitOutcome::Submitted(values) => {
                presenter.show_completion(&values);
                return Ok(());
            }
            SubmitOutcome::Invalid(errors) => {
                presenter.show_form_errors(&errors);
                pending = errors.into_keys().collect();
            }
            SubmitOutcome::Failed(err) => {
                return Err(format!("submission failed: {}", err).into());
            }
            other => {
                return Err(format!("unexpected submit outcome: {:?}", other).into());
            }
        }
    }
}

fn prompt_field(
    prompt: &PromptContext,
    field: &FieldDescriptor,
    current: &Value,
    presenter: &WizardPresenter,
) -> CliResult<Value> {
    loop {
        presenter.show_prompt(prompt);
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err("input closed before the form was submitted".into());
        }

        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("form filling aborted by user".into());
        }

        match parse_answer(field, trimmed, current) {
            Ok(value) => return Ok(value),
            Err(err) => presenter.show_parse_error(&err),
        }
    }
}

fn parse_answer(
    field: &FieldDescriptor,
    raw: &str,
    current: &Value,
) -> Result<Value, AnswerParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(current.clone());
    }
    if raw == "-" {
        return Ok(field.kind.empty_value());
    }

    match field.kind {
        FieldKind::Checkbox => parse_checkbox(raw),
        FieldKind::Number => parse_number(raw),
        FieldKind::Select | FieldKind::Radio => parse_choice(field, raw),
        _ => Ok(Value::String(raw.to_string())),
    }
}

fn parse_checkbox(raw: &str) -> Result<Value, AnswerParseError> {
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Ok(Value::Bool(true)),
        "n" | "no" | "false" | "0" | "off" => Ok(Value::Bool(false)),
        _ => Err(AnswerParseError::new(
            "answer yes or no",
            Some("yes/no, y/n, true/false".into()),
        )),
    }
}

fn parse_number(raw: &str) -> Result<Value, AnswerParseError> {
    if let Ok(int) = raw.parse::<i64>() {
        return Ok(Value::Number(Number::from(int)));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| AnswerParseError::new("enter a number", Some(format!("got '{}'", raw))))
}

fn parse_choice(field: &FieldDescriptor, raw: &str) -> Result<Value, AnswerParseError> {
    if field.options.is_empty() {
        return Ok(Value::String(raw.to_string()));
    }
    let by_index = raw
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| field.options.get(index));
    let chosen = field
        .options
        .iter()
        .find(|option| option.value == raw)
        .or_else(|| {
            field
                .options
                .iter()
                .find(|option| option.label.eq_ignore_ascii_case(raw))
        })
        .or(by_index);

    match chosen {
        Some(option) => Ok(Value::String(option.value.clone())),
        None => {
            let values = field
                .options
                .iter()
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>();
            Err(AnswerParseError::new(
                format!("'{}' is not one of the choices", raw),
                Some(values.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use medrep_form_spec::{FieldOption, ValidationRules};
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;

    fn specialty_field() -> FieldDescriptor {
        FieldDescriptor::new("specialty", "Specialty", FieldKind::Select).with_options(vec![
            FieldOption::new("cardiology", "Cardiology"),
            FieldOption::new("general-practice", "General Practice"),
        ])
    }

    fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn parse_answer_checkbox_accepts_yes() {
        let field = FieldDescriptor::new("consent", "Consent", FieldKind::Checkbox);
        assert_eq!(
            parse_answer(&field, "yes", &json!(false)).unwrap(),
            Value::Bool(true)
        );
        assert!(parse_answer(&field, "maybe", &json!(false)).is_err());
    }

    #[test]
    fn parse_answer_number_handles_integers_and_decimals() {
        let field = FieldDescriptor::new("price", "Price", FieldKind::Number);
        assert_eq!(
            parse_answer(&field, "42", &json!("")).unwrap(),
            Value::Number(Number::from(42))
        );
        assert_eq!(parse_answer(&field, "12.5", &json!("")).unwrap(), json!(12.5));
        assert!(parse_answer(&field, "twelve", &json!("")).is_err());
    }

    #[test]
    fn parse_answer_choice_matches_value_label_or_index() {
        let field = specialty_field();
        assert_eq!(
            parse_answer(&field, "cardiology", &json!("")).unwrap(),
            json!("cardiology")
        );
        assert_eq!(
            parse_answer(&field, "general practice", &json!("")).unwrap(),
            json!("general-practice")
        );
        assert_eq!(
            parse_answer(&field, "2", &json!("")).unwrap(),
            json!("general-practice")
        );
        assert!(parse_answer(&field, "oncology", &json!("")).is_err());
    }

    #[test]
    fn parse_answer_blank_keeps_current_and_dash_clears() {
        let field = FieldDescriptor::new("timeout", "Timeout", FieldKind::Number)
            .with_rules(ValidationRules::default());
        assert_eq!(parse_answer(&field, "", &json!(30)).unwrap(), json!(30));
        assert_eq!(parse_answer(&field, "-", &json!(30)).unwrap(), json!(""));
    }

    #[test]
    fn check_accepts_bundled_schema() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(workspace.path(), "hcp.json", catalog::HCP_CONTACT_JSON);
        Command::cargo_bin("medrep-forms")?
            .arg("check")
            .arg("--schema")
            .arg(&schema)
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn validate_fails_for_invalid_values() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(
            workspace.path(),
            "settings.json",
            catalog::ACCOUNT_SETTINGS_JSON,
        );
        let values = write_fixture(
            workspace.path(),
            "values.json",
            &json!({ "sessionTimeout": 4 }).to_string(),
        );
        let output = Command::cargo_bin("medrep-forms")?
            .arg("validate")
            .arg("--schema")
            .arg(&schema)
            .arg("--values")
            .arg(&values)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(output)?;
        assert!(stdout.contains("Session Timeout must be at least 5"));
        Ok(())
    }

    #[test]
    fn render_json_outputs_fields() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(
            workspace.path(),
            "device.json",
            catalog::DEVICE_REGISTRATION_JSON,
        );
        let output = Command::cargo_bin("medrep-forms")?
            .arg("render")
            .arg("--schema")
            .arg(&schema)
            .arg("--format")
            .arg("json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let ui: Value = serde_json::from_slice(&output)?;
        assert_eq!(ui["form_id"], "device-registration");
        assert_eq!(ui["submit"]["label"], "Register Device");
        Ok(())
    }

    #[test]
    fn fill_submits_defaults_to_out_file() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = assert_fs::TempDir::new()?;
        let schema = write_fixture(
            workspace.path(),
            "settings.json",
            catalog::ACCOUNT_SETTINGS_JSON,
        );
        let out = workspace.path().join("submitted.json");

        Command::cargo_bin("medrep-forms")?
            .arg("fill")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out)
            .write_stdin("\n\n\n\n\n")
            .assert()
            .success();

        let submitted: Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
        assert_eq!(submitted["sessionTimeout"], 30);
        assert_eq!(submitted["theme"], "system");
        assert_eq!(submitted["emailNotifications"], true);
        Ok(())
    }

    #[test]
    fn fill_reprompts_until_field_is_valid() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = assert_fs::TempDir::new()?;
        let form = json!({
            "id": "profile",
            "fields": [
                {
                    "name": "firstName",
                    "label": "First Name",
                    "type": "text",
                    "required": true,
                    "validationRules": { "minLength": 2 }
                }
            ]
        });
        let schema = write_fixture(workspace.path(), "profile.json", &form.to_string());
        let out = workspace.path().join("profile.values.json");

        let assert = Command::cargo_bin("medrep-forms")?
            .arg("fill")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out)
            .write_stdin("\nA\nAl\n")
            .assert()
            .success();
        let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
        assert!(stderr.contains("First Name is required"));
        assert!(stderr.contains("First Name must be at least 2 characters"));

        let submitted: Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
        assert_eq!(submitted, json!({ "firstName": "Al" }));
        Ok(())
    }

    #[test]
    fn fill_fails_when_input_ends_early() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(workspace.path(), "hcp.json", catalog::HCP_CONTACT_JSON);
        Command::cargo_bin("medrep-forms")?
            .arg("fill")
            .arg("--schema")
            .arg(&schema)
            .write_stdin("Grace\n")
            .assert()
            .failure();
        Ok(())
    }

    #[test]
    fn export_refuses_unsolvable_pattern() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let form = json!({
            "id": "badge",
            "fields": [
                {
                    "name": "badge",
                    "label": "Badge",
                    "type": "text",
                    "validationRules": { "pattern": "[0-9]{4}" }
                }
            ]
        });
        let schema = write_fixture(workspace.path(), "badge.json", &form.to_string());
        let out_root = workspace.path().join("bundles");

        Command::cargo_bin("medrep-forms")?
            .arg("export")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out_root)
            .assert()
            .failure();
        assert!(!out_root.join("badge").exists());

        let with_placeholder = json!({
            "id": "badge",
            "fields": [
                {
                    "name": "badge",
                    "label": "Badge",
                    "type": "text",
                    "placeholder": "0042",
                    "validationRules": { "pattern": "[0-9]{4}" }
                }
            ]
        });
        fs::write(&schema, with_placeholder.to_string())?;
        Command::cargo_bin("medrep-forms")?
            .arg("export")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out_root)
            .assert()
            .success();
        let examples: Value = serde_json::from_str(&fs::read_to_string(
            out_root.join("badge/examples/badge.values.example.json"),
        )?)?;
        assert_eq!(examples["badge"], "0042");
        Ok(())
    }

    #[test]
    fn export_device_bundle_validates() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(
            workspace.path(),
            "device.json",
            catalog::DEVICE_REGISTRATION_JSON,
        );
        let out_root = workspace.path().join("bundles");
        Command::cargo_bin("medrep-forms")?
            .arg("export")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out_root)
            .assert()
            .success();
        Command::cargo_bin("medrep-forms")?
            .arg("validate")
            .arg("--schema")
            .arg(&schema)
            .arg("--values")
            .arg(out_root.join(
                "device-registration/examples/device-registration.values.example.json",
            ))
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn export_writes_bundle() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = TempDir::new()?;
        let schema = write_fixture(workspace.path(), "hcp.json", catalog::HCP_CONTACT_JSON);
        let out_root = workspace.path().join("bundles");

        Command::cargo_bin("medrep-forms")?
            .arg("export")
            .arg("--schema")
            .arg(&schema)
            .arg("--out")
            .arg(&out_root)
            .assert()
            .success();

        let bundle_dir = out_root.join("hcp-contact");
        assert!(bundle_dir.join("forms/hcp-contact.form.json").exists());
        assert!(bundle_dir.join("schemas/hcp-contact.values.schema.json").exists());
        assert!(bundle_dir.join("README.md").exists());

        let examples = bundle_dir.join("examples/hcp-contact.values.example.json");
        Command::cargo_bin("medrep-forms")?
            .arg("validate")
            .arg("--schema")
            .arg(&schema)
            .arg("--values")
            .arg(&examples)
            .assert()
            .success();
        Ok(())
    }
}
