//! Runtime state of one mounted form: current values, inline errors and the
//! submission lifecycle around the owner's submit handler.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    render::{RenderPayload, build_render_payload},
    spec::{FieldErrors, FieldValues, FormSchema},
    validate::{collect_errors, resolve_value, validate_field},
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("field '{0}' is not declared by the form")]
    UnknownField(String),
}

/// Failure reported by a submit handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for HandlerError {
    fn from(err: std::io::Error) -> Self {
        HandlerError::new(err.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::new(err.to_string())
    }
}

/// Receives the values of a form that passed validation.
pub trait SubmitHandler {
    fn submit(&self, values: FieldValues) -> impl Future<Output = Result<(), HandlerError>>;
}

impl<F, Fut> SubmitHandler for F
where
    F: Fn(FieldValues) -> Fut,
    Fut: Future<Output = Result<(), HandlerError>>,
{
    fn submit(&self, values: FieldValues) -> impl Future<Output = Result<(), HandlerError>> {
        self(values)
    }
}

/// Placeholder handler type for engines built without one. Never invoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHandler;

impl SubmitHandler for NoHandler {
    async fn submit(&self, _values: FieldValues) -> Result<(), HandlerError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// The last handler call failed; a new attempt is allowed.
    Failed { message: String },
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Failed { .. } => "failed",
        }
    }
}

/// Result of a single [`FormEngine::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The handler accepted these values.
    Submitted(FieldValues),
    /// Validation passed but the engine has no handler.
    Validated(FieldValues),
    /// Validation failed; the errors are also stored on the engine.
    Invalid(FieldErrors),
    /// The handler returned an error.
    Failed(HandlerError),
    /// A previous submission has not settled yet.
    InFlight,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

pub struct FormEngine<H = NoHandler> {
    schema: FormSchema,
    values: FieldValues,
    errors: FieldErrors,
    state: SubmissionState,
    handler: Option<H>,
}

impl FormEngine<NoHandler> {
    /// Seeds every declared field from `initial`, then its default, then the
    /// empty value for its kind.
    pub fn new(schema: FormSchema, initial: Option<&FieldValues>) -> Self {
        let mut values = FieldValues::new();
        for field in &schema.fields {
            let seeded = initial
                .and_then(|initial| initial.get(&field.name))
                .filter(|value| !value.is_null())
                .or(field.default_value.as_ref())
                .cloned()
                .unwrap_or_else(|| field.kind.empty_value());
            values.insert(field.name.clone(), seeded);
        }
        if let Some(initial) = initial {
            for key in initial.keys().filter(|key| schema.field(key).is_none()) {
                debug!(form = %schema.id, field = %key, "dropping undeclared initial value");
            }
        }

        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            state: SubmissionState::Idle,
            handler: None,
        }
    }
}

impl<H> FormEngine<H> {
    /// Replaces the submit handler, keeping the current state.
    pub fn with_handler<G: SubmitHandler>(self, handler: G) -> FormEngine<G> {
        FormEngine {
            schema: self.schema,
            values: self.values,
            errors: self.errors,
            state: self.state,
            handler: Some(handler),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Stores user input and clears any error shown for that field.
    pub fn set_field_value(&mut self, name: &str, value: Value) -> Result<(), EngineError> {
        if self.schema.field(name).is_none() {
            return Err(EngineError::UnknownField(name.to_string()));
        }
        debug!(form = %self.schema.id, field = %name, "field updated");
        self.values.insert(name.to_string(), value);
        self.errors.remove(name);
        Ok(())
    }

    /// Checks one field's current value without touching the stored errors.
    pub fn validate_field(&self, name: &str) -> Result<Option<String>, EngineError> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| EngineError::UnknownField(name.to_string()))?;
        Ok(validate_field(field, &resolve_value(field, &self.values)))
    }

    /// Re-validates every field and replaces the stored errors.
    pub fn validate_form(&mut self) -> bool {
        self.errors = collect_errors(&self.schema, &self.values);
        debug!(
            form = %self.schema.id,
            errors = self.errors.len(),
            "form validated"
        );
        self.errors.is_empty()
    }

    /// Returns a stuck or failed submission to idle.
    pub fn cancel_submission(&mut self) {
        if self.state != SubmissionState::Idle {
            debug!(form = %self.schema.id, from = self.state.as_str(), "submission reset");
        }
        self.state = SubmissionState::Idle;
    }

    pub fn render_payload(&self) -> RenderPayload {
        build_render_payload(&self.schema, &self.values, &self.errors, &self.state)
    }

    fn snapshot(&self) -> FieldValues {
        self.schema
            .fields
            .iter()
            .map(|field| (field.name.clone(), resolve_value(field, &self.values)))
            .collect()
    }
}

impl<H: SubmitHandler> FormEngine<H> {
    /// Validates the form and, when it passes, hands the values to the
    /// handler. The state is `Submitting` only while the handler runs.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            warn!(form = %self.schema.id, "submit ignored while a submission is in flight");
            return SubmitOutcome::InFlight;
        }

        if !self.validate_form() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        let values = self.snapshot();
        let Some(handler) = self.handler.as_ref() else {
            return SubmitOutcome::Validated(values);
        };

        self.state = SubmissionState::Submitting;
        let result = handler.submit(values.clone()).await;

        match result {
            Ok(()) => {
                info!(form = %self.schema.id, fields = values.len(), "form submitted");
                self.state = SubmissionState::Idle;
                SubmitOutcome::Submitted(values)
            }
            Err(err) => {
                warn!(form = %self.schema.id, error = %err, "submit handler failed");
                self.state = SubmissionState::Failed {
                    message: err.message().to_string(),
                };
                SubmitOutcome::Failed(err)
            }
        }
    }
}
