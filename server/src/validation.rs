//! Per-endpoint request validation.
//!
//! # Design
//! POST and PUT share one payload schema: `name` (non-empty string) and
//! `completed` (boolean, with textual coercion). The body arrives as raw
//! JSON and is checked field by field so that *every* failing field is
//! reported in a single 400 response, not just the first. Missing and
//! uncoercible values surface the same "not provided" text per field.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field errors keyed by field name, in stable order.
pub type FieldErrors = BTreeMap<&'static str, String>;

const NOT_PROVIDED: &str = "not provided";

/// Validated body for todo creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPayload {
    pub name: String,
    pub completed: bool,
}

impl TodoPayload {
    /// Check the raw JSON body against the schema, collecting all field
    /// failures before returning.
    pub fn from_value(body: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = match body.get("name") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => {
                errors.insert("name", NOT_PROVIDED.to_string());
                None
            }
        };

        let completed = match body.get("completed").and_then(coerce_bool) {
            Some(b) => Some(b),
            None => {
                errors.insert("completed", NOT_PROVIDED.to_string());
                None
            }
        };

        match (name, completed) {
            (Some(name), Some(completed)) => Ok(Self { name, completed }),
            _ => Err(errors),
        }
    }
}

/// Coerce a JSON value to a boolean.
///
/// Accepts JSON booleans, the numbers 0/1, and the strings "true"/"false"/
/// "1"/"0" (ASCII case-insensitive). Anything else is `None`.
fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
