#![allow(missing_docs)]

pub mod catalog;
pub mod check;
pub mod engine;
pub mod examples;
pub mod render;
pub mod spec;
pub mod validate;
pub mod values_schema;

pub use check::{SchemaError, check_schema, schema_issues};
pub use engine::{
    EngineError, FormEngine, HandlerError, NoHandler, SubmissionState, SubmitHandler,
    SubmitOutcome,
};
pub use examples::generate as example_values;
pub use render::{
    Control, RenderField, RenderPayload, RenderStatus, TemporalKind, build_render_payload,
    control_for, render_json_ui, render_text,
};
pub use spec::{
    FieldDescriptor, FieldErrors, FieldKind, FieldOption, FieldValues, FormLayout, FormSchema,
    LayoutKind, ValidationRules,
};
pub use validate::{ValidationReport, resolve_value, validate_field, validate_values};
pub use values_schema::generate as values_schema;
