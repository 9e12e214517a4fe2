//! Field-state engine seam
//!
//! The form layer never validates anything itself. Values, errors and
//! statuses live in a field-state engine; [`FieldEngine`] is the part of that
//! engine the form layer talks to, and [`MemoryFieldStore`] is the default
//! engine a form gets when the caller does not bring one.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::field::{NamePath, NameSegment};
use crate::status::ValidateStatus;

/// Per-field state held by an engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMeta {
    pub value: Option<Value>,
    pub errors: Vec<String>,
    pub touched: bool,
    pub validating: bool,
    pub status: Option<ValidateStatus>,
}

/// Operations the form layer needs from a field-state engine
pub trait FieldEngine {
    fn field_value(&self, name: &NamePath) -> Option<Value>;
    fn set_field_value(&mut self, name: NamePath, value: Value);
    fn field_errors(&self, name: &NamePath) -> Vec<String>;
    /// Replace a field's error list wholesale, as a validation pass does
    fn set_field_errors(&mut self, name: NamePath, errors: Vec<String>);
    fn field_status(&self, name: &NamePath) -> Option<ValidateStatus>;
    fn set_field_status(&mut self, name: NamePath, status: Option<ValidateStatus>);
    fn is_field_touched(&self, name: &NamePath) -> bool;
    /// Nested JSON object of every field value
    fn field_values(&self) -> Value;
    fn reset_fields(&mut self);
}

/// In-memory engine keyed by name path
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldStore {
    fields: BTreeMap<NamePath, FieldMeta>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(&self, name: &NamePath) -> Option<&FieldMeta> {
        self.fields.get(name)
    }

    pub fn set_validating(&mut self, name: NamePath, validating: bool) {
        let meta = self.fields.entry(name).or_default();
        meta.validating = validating;
        if validating {
            meta.status = Some(ValidateStatus::Validating);
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn insert_nested(root: &mut Value, segments: &[NameSegment], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *root = value;
        return;
    };

    if !root.is_object() {
        *root = Value::Object(Map::new());
    }
    if let Value::Object(map) = root {
        let slot = map.entry(first.to_string()).or_insert(Value::Null);
        insert_nested(slot, rest, value);
    }
}

impl FieldEngine for MemoryFieldStore {
    fn field_value(&self, name: &NamePath) -> Option<Value> {
        self.fields.get(name).and_then(|m| m.value.clone())
    }

    fn set_field_value(&mut self, name: NamePath, value: Value) {
        let meta = self.fields.entry(name).or_default();
        meta.value = Some(value);
        meta.touched = true;
    }

    fn field_errors(&self, name: &NamePath) -> Vec<String> {
        self.fields
            .get(name)
            .map(|m| m.errors.clone())
            .unwrap_or_default()
    }

    fn set_field_errors(&mut self, name: NamePath, errors: Vec<String>) {
        let meta = self.fields.entry(name).or_default();
        meta.validating = false;
        meta.status = Some(if errors.is_empty() {
            ValidateStatus::Success
        } else {
            ValidateStatus::Error
        });
        meta.errors = errors;
    }

    fn field_status(&self, name: &NamePath) -> Option<ValidateStatus> {
        self.fields.get(name).and_then(|m| m.status)
    }

    fn set_field_status(&mut self, name: NamePath, status: Option<ValidateStatus>) {
        self.fields.entry(name).or_default().status = status;
    }

    fn is_field_touched(&self, name: &NamePath) -> bool {
        self.fields.get(name).map(|m| m.touched).unwrap_or(false)
    }

    /// Keys are nested as objects; list indices become object keys too
    fn field_values(&self) -> Value {
        let mut root = Value::Object(Map::new());
        for (name, meta) in &self.fields {
            if let Some(value) = &meta.value {
                insert_nested(&mut root, name.segments(), value.clone());
            }
        }
        root
    }

    fn reset_fields(&mut self) {
        self.fields.clear();
    }
}
