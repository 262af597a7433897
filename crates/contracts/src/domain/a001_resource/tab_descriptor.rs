use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dynamic tab: a name plus content whose shape is given by a schema type tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub name: String,
    #[serde(default)]
    pub schema: TabSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl TabDescriptor {
    pub fn effective_type(&self) -> EffectiveType {
        self.schema.type_tag.effective()
    }
}

/// JSON-Schema fragment attached to a tab descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabSchema {
    #[serde(rename = "type", default)]
    pub type_tag: SchemaType,
}

/// Type tag as it appears on the wire: one tag or a list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Many(Vec<String>),
}

impl Default for SchemaType {
    fn default() -> Self {
        SchemaType::Many(Vec::new())
    }
}

impl SchemaType {
    /// Only the first tag of a list is honoured.
    pub fn effective(&self) -> EffectiveType {
        match self {
            SchemaType::Single(tag) => EffectiveType::from_tag(tag),
            SchemaType::Many(tags) => tags
                .first()
                .map(|tag| EffectiveType::from_tag(tag))
                .unwrap_or_else(|| EffectiveType::Unknown(String::new())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
}

/// Type tag used to pick a rendering strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveType {
    Scalar(ScalarKind),
    Array,
    Object,
    Unknown(String),
}

impl EffectiveType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => EffectiveType::Scalar(ScalarKind::String),
            "integer" => EffectiveType::Scalar(ScalarKind::Integer),
            "boolean" => EffectiveType::Scalar(ScalarKind::Boolean),
            "array" => EffectiveType::Array,
            "object" => EffectiveType::Object,
            other => EffectiveType::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(json: &str) -> TabDescriptor {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_type_tag() {
        let tab = descriptor(r#"{"name":"inputs","schema":{"type":"array"},"content":["a"]}"#);
        assert_eq!(tab.effective_type(), EffectiveType::Array);
    }

    #[test]
    fn test_sequence_uses_first_tag() {
        let tab = descriptor(r#"{"name":"n","schema":{"type":["integer","string"]},"content":5}"#);
        assert_eq!(tab.effective_type(), EffectiveType::Scalar(ScalarKind::Integer));
    }

    #[test]
    fn test_missing_or_empty_type_is_unknown() {
        let tab = descriptor(r#"{"name":"n"}"#);
        assert_eq!(tab.effective_type(), EffectiveType::Unknown(String::new()));
        assert!(tab.content.is_none());

        let tab = descriptor(r#"{"name":"n","schema":{"type":[]}}"#);
        assert_eq!(tab.effective_type(), EffectiveType::Unknown(String::new()));
    }

    #[test]
    fn test_unrecognised_tag() {
        assert_eq!(
            EffectiveType::from_tag("null"),
            EffectiveType::Unknown("null".to_string())
        );
    }
}
