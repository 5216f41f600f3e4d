use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Schema violation for a single mode record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The record itself is not a JSON object
    #[error("mode record must be an object, got {found}")]
    NotAnObject { found: &'static str },

    /// A required field is absent or null
    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    /// A field is present with the wrong JSON type
    #[error("field '{field}' must be {expected}, got {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaError {
    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SchemaError::NotAnObject { .. } => None,
            SchemaError::MissingField { field } | SchemaError::InvalidType { field, .. } => {
                Some(field)
            }
        }
    }
}

/// A single mode configuration
///
/// `slug` is the stable key the UI uses to address a record. Optional
/// fields that were absent on input stay absent on output; they are never
/// written back as `null` or zero.
///
/// Deserialization goes through [`ModeRecord::from_value`], so records read
/// from disk and records posted over HTTP are checked by the same schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ModeRecord {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
}

impl ModeRecord {
    /// Create a record with only the required fields set
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: None,
            icon: None,
            model: None,
            system_prompt: None,
            user_prompt: None,
            temperature: None,
            max_tokens: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        }
    }

    /// Validate a raw JSON value against the mode schema
    ///
    /// Unknown keys are ignored. Optional keys set to `null` are treated as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, checking required fields
    /// before optional ones.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let obj = value.as_object().ok_or(SchemaError::NotAnObject {
            found: json_type_name(value),
        })?;

        Ok(Self {
            slug: required_string(obj, "slug")?,
            name: required_string(obj, "name")?,
            description: optional_string(obj, "description")?,
            icon: optional_string(obj, "icon")?,
            model: optional_string(obj, "model")?,
            system_prompt: optional_string(obj, "system_prompt")?,
            user_prompt: optional_string(obj, "user_prompt")?,
            temperature: optional_float(obj, "temperature")?,
            max_tokens: optional_integer(obj, "max_tokens")?,
            top_p: optional_float(obj, "top_p")?,
            frequency_penalty: optional_float(obj, "frequency_penalty")?,
            presence_penalty: optional_float(obj, "presence_penalty")?,
        })
    }
}

impl TryFrom<Value> for ModeRecord {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn required_string(obj: &Map<String, Value>, field: &'static str) -> Result<String, SchemaError> {
    match present(obj, field) {
        None => Err(SchemaError::MissingField { field }),
        Some(v) => v.as_str().map(str::to_owned).ok_or(SchemaError::InvalidType {
            field,
            expected: "a string",
            found: json_type_name(v),
        }),
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, SchemaError> {
    present(obj, field)
        .map(|v| {
            v.as_str().map(str::to_owned).ok_or(SchemaError::InvalidType {
                field,
                expected: "a string",
                found: json_type_name(v),
            })
        })
        .transpose()
}

fn optional_float(obj: &Map<String, Value>, field: &'static str) -> Result<Option<f64>, SchemaError> {
    present(obj, field)
        .map(|v| {
            v.as_f64().ok_or(SchemaError::InvalidType {
                field,
                expected: "a number",
                found: json_type_name(v),
            })
        })
        .transpose()
}

fn optional_integer(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, SchemaError> {
    present(obj, field)
        .map(|v| {
            v.as_i64().ok_or(SchemaError::InvalidType {
                field,
                expected: "an integer",
                found: json_type_name(v),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_record() {
        let record = ModeRecord::from_value(&json!({"slug": "code", "name": "Code"})).unwrap();
        assert_eq!(record, ModeRecord::new("code", "Code"));
    }

    #[test]
    fn test_null_optional_is_absent() {
        let record =
            ModeRecord::from_value(&json!({"slug": "a", "name": "A", "temperature": null}))
                .unwrap();
        assert!(record.temperature.is_none());
    }

    #[test]
    fn test_integer_accepted_for_float_field() {
        let record =
            ModeRecord::from_value(&json!({"slug": "a", "name": "A", "top_p": 1})).unwrap();
        assert_eq!(record.top_p, Some(1.0));
    }

    #[test]
    fn test_float_rejected_for_max_tokens() {
        let err = ModeRecord::from_value(&json!({"slug": "a", "name": "A", "max_tokens": 1.5}))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidType {
                field: "max_tokens",
                expected: "an integer",
                found: "a float",
            }
        );
    }

    #[test]
    fn test_missing_slug() {
        let err = ModeRecord::from_value(&json!({"name": "A"})).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "slug" });
        assert_eq!(err.field(), Some("slug"));
    }

    #[test]
    fn test_not_an_object() {
        let err = ModeRecord::from_value(&json!(["slug"])).unwrap_err();
        assert_eq!(err, SchemaError::NotAnObject { found: "an array" });
        assert_eq!(err.field(), None);
    }
}
