//! Response schema definitions for structured extraction.
//!
//! The completion service enforces output shape from a JSON schema attached
//! to the request. This module models that schema as a typed tree instead
//! of a hand-written `serde_json::Value`, so malformed registry definitions
//! (a `required` entry naming no declared property) fail at construction
//! rather than surfacing as a confusing service-side error.

pub mod registry;

use indexmap::IndexMap;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors from schema construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required field '{0}' is not a declared property of the object schema")]
    UnknownRequiredField(String),
}

/// A node in the response schema tree.
///
/// Mirrors the subset of the service's schema dialect this client needs:
/// objects with required-field lists, arrays, string enumerations, strings,
/// and range-bounded numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Object {
        properties: IndexMap<String, Schema>,
        required: Vec<String>,
        description: Option<String>,
    },
    Array {
        items: Box<Schema>,
        description: Option<String>,
    },
    Enum {
        values: Vec<&'static str>,
        description: Option<String>,
    },
    String {
        description: Option<String>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
        description: Option<String>,
    },
}

impl Schema {
    /// Build an object schema, validating that every `required` entry names
    /// a declared property.
    pub fn object<I>(properties: I, required: &[&str]) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        let properties: IndexMap<String, Schema> = properties
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();

        for field in required {
            if !properties.contains_key(*field) {
                return Err(SchemaError::UnknownRequiredField(field.to_string()));
            }
        }

        Ok(Schema::Object {
            properties,
            required: required.iter().map(|f| f.to_string()).collect(),
            description: None,
        })
    }

    /// An object with no declared properties, for free-form maps whose
    /// keys the service chooses (e.g. language name to count).
    pub fn open_object() -> Self {
        Schema::Object {
            properties: IndexMap::new(),
            required: Vec::new(),
            description: None,
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            description: None,
        }
    }

    pub fn string() -> Self {
        Schema::String { description: None }
    }

    pub fn number() -> Self {
        Schema::Number {
            minimum: None,
            maximum: None,
            description: None,
        }
    }

    /// A number constrained to a closed range.
    pub fn number_range(minimum: f64, maximum: f64) -> Self {
        Schema::Number {
            minimum: Some(minimum),
            maximum: Some(maximum),
            description: None,
        }
    }

    /// A string restricted to a fixed set of values.
    pub fn enumeration(values: impl IntoIterator<Item = &'static str>) -> Self {
        Schema::Enum {
            values: values.into_iter().collect(),
            description: None,
        }
    }

    /// Attach a description to this node.
    pub fn describe(mut self, text: &str) -> Self {
        let slot = match &mut self {
            Schema::Object { description, .. }
            | Schema::Array { description, .. }
            | Schema::Enum { description, .. }
            | Schema::String { description }
            | Schema::Number { description, .. } => description,
        };
        *slot = Some(text.to_string());
        self
    }

    /// Render the tree in the service's schema dialect.
    pub fn to_value(&self) -> Value {
        let mut value = match self {
            Schema::Object {
                properties,
                required,
                ..
            } => {
                let props: serde_json::Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_value()))
                    .collect();
                let mut obj = json!({ "type": "OBJECT", "properties": props });
                if !required.is_empty() {
                    obj["required"] = json!(required);
                }
                obj
            }
            Schema::Array { items, .. } => {
                json!({ "type": "ARRAY", "items": items.to_value() })
            }
            Schema::Enum { values, .. } => {
                json!({ "type": "STRING", "enum": values })
            }
            Schema::String { .. } => json!({ "type": "STRING" }),
            Schema::Number {
                minimum, maximum, ..
            } => {
                let mut obj = json!({ "type": "NUMBER" });
                if let Some(min) = minimum {
                    obj["minimum"] = json!(min);
                }
                if let Some(max) = maximum {
                    obj["maximum"] = json!(max);
                }
                obj
            }
        };

        let description = match self {
            Schema::Object { description, .. }
            | Schema::Array { description, .. }
            | Schema::Enum { description, .. }
            | Schema::String { description }
            | Schema::Number { description, .. } => description,
        };
        if let Some(text) = description {
            value["description"] = json!(text);
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn object_rejects_undeclared_required_field() {
        let result = Schema::object([("name", Schema::string())], &["name", "missing"]);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::UnknownRequiredField("missing".to_string())
        );
    }

    #[test]
    fn object_accepts_required_subset() {
        let schema = Schema::object(
            [("name", Schema::string()), ("count", Schema::number())],
            &["name"],
        );
        assert!(schema.is_ok());
    }

    #[test]
    fn renders_object_with_required_list() {
        let schema = Schema::object([("name", Schema::string())], &["name"]).unwrap();
        let value = schema.to_value();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["name"]["type"], "STRING");
        assert_eq!(value["required"], json!(["name"]));
    }

    #[test]
    fn renders_number_range() {
        let value = Schema::number_range(0.0, 5.0).to_value();
        assert_eq!(value["type"], "NUMBER");
        assert_eq!(value["minimum"], json!(0.0));
        assert_eq!(value["maximum"], json!(5.0));
    }

    #[test]
    fn renders_enum_as_constrained_string() {
        let value = Schema::enumeration(["High", "Medium", "Low"]).to_value();
        assert_eq!(value["type"], "STRING");
        assert_eq!(value["enum"], json!(["High", "Medium", "Low"]));
    }

    #[test]
    fn renders_nested_array_items() {
        let value = Schema::array(Schema::string()).to_value();
        assert_eq!(value["type"], "ARRAY");
        assert_eq!(value["items"]["type"], "STRING");
    }

    #[test]
    fn open_object_renders_without_required() {
        let value = Schema::open_object().to_value();
        assert_eq!(value["type"], "OBJECT");
        assert!(value["properties"].as_object().unwrap().is_empty());
        assert!(value.get("required").is_none());
    }

    #[test]
    fn describe_attaches_description() {
        let value = Schema::string().describe("A short label").to_value();
        assert_eq!(value["description"], "A short label");
    }

    #[test]
    fn property_order_is_preserved() {
        let schema = Schema::object(
            [
                ("first", Schema::string()),
                ("second", Schema::string()),
                ("third", Schema::string()),
            ],
            &[],
        )
        .unwrap();
        let value = schema.to_value();
        let keys: Vec<&String> = value["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }
}
