//! Form configuration handed down to field wrappers

use serde::{Deserialize, Serialize};

use crate::layout::{ColProps, LabelAlign};

/// Read-only configuration a form publishes to the fields below it.
///
/// Fields prefer their own props and fall back to these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormContext {
    pub name: Option<String>,
    pub label_align: Option<LabelAlign>,
    pub label_col: Option<ColProps>,
    pub wrapper_col: Option<ColProps>,
    pub vertical: bool,
    pub colon: Option<bool>,
}

impl FormContext {
    /// Copy for a nested scope, without the column specs.
    ///
    /// Outer label/wrapper columns must not size the fields of an inner form.
    pub fn narrowed(&self) -> FormContext {
        FormContext {
            label_col: None,
            wrapper_col: None,
            ..self.clone()
        }
    }

    /// Local wrapper column if given, else the inherited one, else empty
    pub fn merged_wrapper_col(&self, local: Option<&ColProps>) -> ColProps {
        local
            .or(self.wrapper_col.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Local label column if given, else the inherited one, else empty
    pub fn merged_label_col(&self, local: Option<&ColProps>) -> ColProps {
        local
            .or(self.label_col.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    pub fn merged_label_align(&self, local: Option<LabelAlign>) -> LabelAlign {
        local.or(self.label_align).unwrap_or_default()
    }

    /// Colons are shown unless disabled, and never in vertical layout
    pub fn show_colon(&self, local: Option<bool>) -> bool {
        !self.vertical && local.or(self.colon).unwrap_or(true)
    }
}
