use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::tab_descriptor::TabDescriptor;

// ============================================================================
// Resource
// ============================================================================

/// Keys of the tabs that are always composed by the resource view.
///
/// Dynamic tab descriptors must not reuse any of them.
pub const FIXED_TAB_KEYS: [&str; 8] = [
    "readme",
    "changelog",
    "usage",
    "parameters",
    "example",
    "versions",
    "raw",
    "optional",
];

pub fn is_fixed_tab_key(key: &str) -> bool {
    FIXED_TAB_KEYS.contains(&key)
}

/// A package/module record shown by the resource view.
///
/// Every field defaults, so `{}` deserializes into an empty record which
/// the view treats as "not loaded yet". Keys this struct does not know are
/// kept in `extra` so the raw view shows the record as it was received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub database: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<ResourceArgument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<Vec<CodeExample>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_usage: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// True when the record carries no keys at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.database.is_empty()
            && self.resource_version.is_empty()
            && self.source_url.is_empty()
            && self.arguments.is_none()
            && self.code_examples.is_none()
            && self.example_usage.is_none()
            && self.extra.is_empty()
    }

    /// Code examples, or an empty slice when the record has none.
    pub fn code_examples(&self) -> &[CodeExample] {
        self.code_examples.as_deref().unwrap_or_default()
    }
}

/// Parameter accepted by a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceArgument {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub arg_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to an example source file hosted on GitHub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeExample {
    /// Browser URL of the example file
    #[serde(deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tested: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// API payloads
// ============================================================================

/// Resource together with the dynamic tabs its page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDetails {
    pub resource: Resource,
    #[serde(default)]
    pub required_tabs: Vec<TabDescriptor>,
    #[serde(default)]
    pub optional_tabs: Vec<TabDescriptor>,
}

/// One published version of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceVersion {
    pub version: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Query accepted by `GET /api/resources/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
