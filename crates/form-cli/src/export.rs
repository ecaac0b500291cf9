use serde::Serialize;
use serde_json::Value;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use medrep_form_spec::{FieldValues, FormSchema, example_values, values_schema};

/// Artifacts derived from a single form schema.
pub struct ExportBundle {
    pub schema: FormSchema,
    pub values_schema: Value,
    pub examples: FieldValues,
}

pub fn build_bundle(schema: FormSchema) -> ExportBundle {
    let values_schema = values_schema(&schema);
    let examples = example_values(&schema);
    ExportBundle {
        schema,
        values_schema,
        examples,
    }
}

/// Writes the bundle under `out_root/<form id>/` and returns that directory.
pub fn write_bundle(bundle: &ExportBundle, out_root: &Path, force: bool) -> io::Result<PathBuf> {
    let base_name = sanitize_file_name(&bundle.schema.id);
    let bundle_dir = out_root.join(&base_name);
    if bundle_dir.exists() && !force {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{} already exists; pass --force to overwrite",
                bundle_dir.display()
            ),
        ));
    }

    let forms_dir = bundle_dir.join("forms");
    let examples_dir = bundle_dir.join("examples");
    let schemas_dir = bundle_dir.join("schemas");

    fs::create_dir_all(&forms_dir)?;
    fs::create_dir_all(&examples_dir)?;
    fs::create_dir_all(&schemas_dir)?;

    write_json(
        &forms_dir.join(format!("{}.form.json", base_name)),
        &bundle.schema,
    )?;
    write_json(
        &examples_dir.join(format!("{}.values.example.json", base_name)),
        &bundle.examples,
    )?;
    write_json(
        &schemas_dir.join(format!("{}.values.schema.json", base_name)),
        &bundle.values_schema,
    )?;

    fs::write(bundle_dir.join("README.md"), build_readme(bundle, &base_name))?;

    Ok(bundle_dir)
}

fn sanitize_file_name(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '-'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "form".into()
    } else {
        cleaned
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> io::Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, contents)
}

fn build_readme(bundle: &ExportBundle, base: &str) -> String {
    let title = bundle.schema.title.as_deref().unwrap_or(base);
    let description = bundle
        .schema
        .description
        .as_deref()
        .unwrap_or("No description provided.");

    format!(
        "# {title}\n\n{description}\n\nFields: {count}\n\n## Files\n\n- `forms/{base}.form.json`\n- `examples/{base}.values.example.json`\n- `schemas/{base}.values.schema.json`\n\nValidate the example values with:\n\n```\nmedrep-forms validate --schema forms/{base}.form.json --values examples/{base}.values.example.json\n```\n",
        title = title,
        description = description,
        count = bundle.schema.fields.len(),
        base = base,
    )
}
