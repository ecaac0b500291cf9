pub mod field;
pub mod form;

pub use field::{FieldDescriptor, FieldKind, FieldOption, ValidationRules};
pub use form::{FormLayout, FormSchema, LayoutKind};

/// Current value of every field, keyed by field name.
pub type FieldValues = serde_json::Map<String, serde_json::Value>;

/// Validation message per failing field, keyed by field name.
pub type FieldErrors = std::collections::BTreeMap<String, String>;
