//! The filing payload: one carrier's submitted MCS-150 data.
//!
//! A [`FilingForm`] wraps the nested JSON object produced by the filing
//! store, keyed by line-number groups (`line1`, `line3_7`, `line26a`, ...).
//! All accessors are total: absent keys read as empty/none, never as an
//! error, so the mapper tolerates any well-formed filing regardless of
//! which optional groups are present. Unknown keys are ignored.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::FilingError;

/// Location of a value inside the filing payload: a line-number group
/// plus an optional key within that group. Filing payloads nest at most
/// one level deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub group: &'static str,
    pub key: Option<&'static str>,
}

impl FieldPath {
    /// A scalar stored directly under a top-level group key.
    pub const fn top(group: &'static str) -> Self {
        Self { group, key: None }
    }

    /// A scalar stored inside a group sub-object.
    pub const fn nested(group: &'static str, key: &'static str) -> Self {
        Self {
            group,
            key: Some(key),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{}.{}", self.group, key),
            None => f.write_str(self.group),
        }
    }
}

/// One carrier's submitted MCS-150 registration data.
///
/// Invariant: the wrapped value is always a JSON object; a non-object
/// payload is rejected at construction as a caller contract violation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingForm {
    root: Map<String, Value>,
}

impl FilingForm {
    /// Wrap a parsed JSON value, rejecting anything but an object.
    pub fn from_value(value: Value) -> Result<Self, FilingError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(FilingError::InvalidInput(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Parse a JSON string into a filing.
    pub fn from_json_str(input: &str) -> Result<Self, FilingError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| FilingError::InvalidInput(format!("malformed JSON: {e}")))?;
        Self::from_value(value)
    }

    /// An empty filing (every group absent).
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    fn lookup(&self, path: &FieldPath) -> Option<&Value> {
        let top = self.root.get(path.group)?;
        match path.key {
            Some(key) => top.as_object()?.get(key),
            None => Some(top),
        }
    }

    /// Scalar at `path` rendered as text.
    ///
    /// Absent keys, nulls, and non-scalar values all read as the empty
    /// string; numbers and booleans stringify.
    pub fn text(&self, path: &FieldPath) -> String {
        match self.lookup(path) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Boolean at `path`, or `None` when absent or not a boolean.
    ///
    /// The distinction matters for the mailing-address toggle: an absent
    /// flag asserts neither of the two same-named checkboxes.
    pub fn flag(&self, path: &FieldPath) -> Option<bool> {
        match self.lookup(path) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_object() {
        let filing = FilingForm::from_value(json!({"line1": "Acme Trucking"})).unwrap();
        assert_eq!(filing.text(&FieldPath::top("line1")), "Acme Trucking");
    }

    #[test]
    fn from_value_rejects_array() {
        let err = FilingForm::from_value(json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid filing input: expected a JSON object, got array"
        );
    }

    #[test]
    fn from_value_rejects_scalar() {
        let err = FilingForm::from_value(json!("just a string")).unwrap_err();
        assert!(matches!(err, FilingError::InvalidInput(_)));
    }

    #[test]
    fn from_json_str_rejects_malformed_json() {
        let err = FilingForm::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("malformed JSON"));
    }

    #[test]
    fn text_absent_group_is_empty() {
        let filing = FilingForm::empty();
        assert_eq!(filing.text(&FieldPath::top("line1")), "");
        assert_eq!(filing.text(&FieldPath::nested("line3_7", "line3")), "");
    }

    #[test]
    fn text_absent_key_in_present_group_is_empty() {
        let filing = FilingForm::from_value(json!({"line3_7": {"line3": "1 Main St"}})).unwrap();
        assert_eq!(filing.text(&FieldPath::nested("line3_7", "line3")), "1 Main St");
        assert_eq!(filing.text(&FieldPath::nested("line3_7", "line4")), "");
    }

    #[test]
    fn text_stringifies_numbers() {
        let filing = FilingForm::from_value(json!({"line21": 120000})).unwrap();
        assert_eq!(filing.text(&FieldPath::top("line21")), "120000");
    }

    #[test]
    fn text_null_is_empty() {
        let filing = FilingForm::from_value(json!({"line2": null})).unwrap();
        assert_eq!(filing.text(&FieldPath::top("line2")), "");
    }

    #[test]
    fn flag_present_booleans() {
        let filing = FilingForm::from_value(json!({"line8_12": {"isSame": true}})).unwrap();
        assert_eq!(filing.flag(&FieldPath::nested("line8_12", "isSame")), Some(true));

        let filing = FilingForm::from_value(json!({"line8_12": {"isSame": false}})).unwrap();
        assert_eq!(filing.flag(&FieldPath::nested("line8_12", "isSame")), Some(false));
    }

    #[test]
    fn flag_absent_is_none() {
        let filing = FilingForm::empty();
        assert_eq!(filing.flag(&FieldPath::nested("line8_12", "isSame")), None);
    }

    #[test]
    fn flag_non_boolean_is_none() {
        let filing = FilingForm::from_value(json!({"line8_12": {"isSame": "yes"}})).unwrap();
        assert_eq!(filing.flag(&FieldPath::nested("line8_12", "isSame")), None);
    }

    #[test]
    fn field_path_display() {
        assert_eq!(FieldPath::top("line20").to_string(), "line20");
        assert_eq!(
            FieldPath::nested("line16_19", "line17").to_string(),
            "line16_19.line17"
        );
    }
}
