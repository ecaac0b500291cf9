use medrep_form_spec::{FieldDescriptor, FieldErrors, FieldKind, FieldValues, FormSchema};
use serde_json::Value;

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: field prompts only.
    Clean,
    /// Verbose output: descriptions, choices, submitted values.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints prompts and feedback while a form is being filled in.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self, schema: &FormSchema) {
        if self.header_printed {
            return;
        }
        match &schema.title {
            Some(title) => println!("Form: {}", title),
            None => println!("Form: {}", schema.id),
        }
        if self.verbosity.is_verbose()
            && let Some(description) = &schema.description
        {
            println!("{}", description);
        }
        println!("Press enter to keep the value in brackets, '-' to clear it, 'exit' to abort.");
        self.header_printed = true;
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = format!("{}/{} {}", prompt.index, prompt.total, prompt.label);
        if prompt.required {
            line.push_str(" *");
        }
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        if !prompt.current.is_empty() {
            line.push_str(&format!(" [{}]", prompt.current));
        }
        println!("{}", line);
        if let Some(help) = &prompt.help {
            println!("{}", help);
        }
        if self.verbosity.is_verbose() && !prompt.choices.is_empty() {
            println!("Choices: {}", prompt.choices.join(", "));
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if let Some(debug) = &error.debug_message {
            eprintln!("  Expected: {}", debug);
        }
    }

    pub fn show_field_error(&self, message: &str) {
        eprintln!("  ! {}", message);
    }

    pub fn show_form_errors(&self, errors: &FieldErrors) {
        eprintln!("The form still has errors:");
        for (name, message) in errors {
            eprintln!("  {}: {}", name, message);
        }
    }

    pub fn show_completion(&self, values: &FieldValues) {
        println!("Submitted ✅");
        if self.verbosity.is_verbose() {
            for (name, value) in values {
                println!("  {} = {}", name, value);
            }
        }
    }
}

/// Context used to format a single prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub label: String,
    pub help: Option<String>,
    pub required: bool,
    pub hint: Option<String>,
    pub current: String,
    pub choices: Vec<String>,
}

impl PromptContext {
    pub fn new(field: &FieldDescriptor, index: usize, total: usize, current: &Value) -> Self {
        let choices = field
            .options
            .iter()
            .map(|option| format!("{} ({})", option.value, option.label))
            .collect::<Vec<_>>();
        Self {
            index,
            total,
            label: field.label.clone(),
            help: field.help_text.clone(),
            required: field.required,
            hint: kind_hint(field),
            current: value_to_display(current),
            choices,
        }
    }
}

fn kind_hint(field: &FieldDescriptor) -> Option<String> {
    match field.kind {
        FieldKind::Checkbox => Some("(yes/no)".to_string()),
        FieldKind::Number => Some("(number)".to_string()),
        FieldKind::Date => Some("(YYYY-MM-DD)".to_string()),
        FieldKind::Time => Some("(HH:MM)".to_string()),
        FieldKind::Datetime => Some("(YYYY-MM-DDTHH:MM)".to_string()),
        FieldKind::Email => Some("(email)".to_string()),
        FieldKind::Select | FieldKind::Radio if !field.options.is_empty() => {
            let values = field
                .options
                .iter()
                .map(|option| option.value.as_str())
                .collect::<Vec<_>>();
            Some(format!("({})", values.join("/")))
        }
        _ => None,
    }
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Error produced when parsing answers from the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}
