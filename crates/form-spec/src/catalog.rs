//! Form schemas used by the dashboard pages, bundled as JSON.

use crate::spec::FormSchema;

pub const HCP_CONTACT_JSON: &str = include_str!("../tests/fixtures/hcp_contact.json");
pub const DEVICE_REGISTRATION_JSON: &str =
    include_str!("../tests/fixtures/device_registration.json");
pub const ACCOUNT_SETTINGS_JSON: &str = include_str!("../tests/fixtures/account_settings.json");

const ENTRIES: [(&str, &str); 3] = [
    ("hcp-contact", HCP_CONTACT_JSON),
    ("device-registration", DEVICE_REGISTRATION_JSON),
    ("account-settings", ACCOUNT_SETTINGS_JSON),
];

pub fn hcp_contact() -> Result<FormSchema, serde_json::Error> {
    serde_json::from_str(HCP_CONTACT_JSON)
}

pub fn device_registration() -> Result<FormSchema, serde_json::Error> {
    serde_json::from_str(DEVICE_REGISTRATION_JSON)
}

pub fn account_settings() -> Result<FormSchema, serde_json::Error> {
    serde_json::from_str(ACCOUNT_SETTINGS_JSON)
}

/// Ids of the bundled schemas.
pub fn ids() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(id, _)| *id)
}

pub fn all() -> Result<Vec<FormSchema>, serde_json::Error> {
    ENTRIES
        .iter()
        .map(|(_, json)| serde_json::from_str(json))
        .collect()
}

pub fn find(id: &str) -> Option<Result<FormSchema, serde_json::Error>> {
    ENTRIES
        .iter()
        .find(|(entry_id, _)| *entry_id == id)
        .map(|(_, json)| serde_json::from_str(json))
}
