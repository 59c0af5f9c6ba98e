//! Dataset items and the validation routine shared by load and replace.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{LabelError, Result, SchemaError};
use crate::label::Label;

const PREMISE: &str = "premise";
const HYPOTHESIS: &str = "hypothesis";

/// One premise/hypothesis pair.
///
/// Fields other than `premise`, `hypothesis` and `label` are carried in
/// `extra` so they reach the export unchanged. `label` keeps whatever value
/// the input had, even when it is not a recognized label.
///
/// Serialized key order is `premise`, `hypothesis`, `label`, then the extras
/// in the order they appeared in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub premise: String,

    pub hypothesis: String,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Item {
    /// Create an unlabeled item.
    pub fn new(premise: impl Into<String>, hypothesis: impl Into<String>) -> Self {
        Self {
            premise: premise.into(),
            hypothesis: hypothesis.into(),
            label: None,
            extra: IndexMap::new(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.set_label(label);
        self
    }

    /// Add an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Overwrite the label field.
    pub fn set_label(&mut self, label: Label) {
        self.label = Some(Value::String(label.as_str().to_string()));
    }

    /// The label field, if it holds one of the three recognized names.
    pub fn recognized_label(&self) -> Option<Label> {
        match self.label.as_ref()? {
            Value::String(name) => Label::from_wire(name),
            _ => None,
        }
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it survives export.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Parse and validate raw dataset text.
///
/// Checks, in order: valid JSON, top-level array, every element carrying
/// string `premise` and `hypothesis` (all offending 1-based positions are
/// reported together), non-empty.
pub fn parse_dataset(raw: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(raw).map_err(LabelError::Parse)?;
    validate_dataset(value)
}

/// Validate an already-parsed JSON value as a dataset.
pub fn validate_dataset(value: Value) -> Result<Vec<Item>> {
    let Value::Array(elements) = value else {
        return Err(SchemaError::NotAnArray.into());
    };

    let positions: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| !has_required_fields(element))
        .map(|(index, _)| index + 1)
        .collect();

    if !positions.is_empty() {
        return Err(SchemaError::MissingFields { positions }.into());
    }

    if elements.is_empty() {
        return Err(SchemaError::Empty.into());
    }

    elements
        .into_iter()
        .map(|element| serde_json::from_value(element).map_err(LabelError::Json))
        .collect()
}

fn has_required_fields(element: &Value) -> bool {
    let Some(object) = element.as_object() else {
        return false;
    };
    [PREMISE, HYPOTHESIS]
        .iter()
        .all(|key| object.get(*key).is_some_and(Value::is_string))
}
