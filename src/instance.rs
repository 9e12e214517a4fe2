//! Form instance handle

use std::ops::{Deref, DerefMut};
use tracing::trace;

use crate::engine::{FieldEngine, MemoryFieldStore};
use crate::field::NamePath;
use crate::scroll::{scroll_into_view, ScrollHost, ScrollOptions};

/// Bookkeeping the form container writes into its instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalHooks {
    /// Name of the form currently rendering this instance
    pub name: Option<String>,
}

/// A field-state engine plus what the form layer adds on top of it.
///
/// Derefs to the engine, so every engine operation is available unchanged.
#[derive(Debug, Clone, Default)]
pub struct FormInstance<E = MemoryFieldStore> {
    engine: E,
    internal: InternalHooks,
}

impl<E: FieldEngine> FormInstance<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            internal: InternalHooks::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn internal(&self) -> &InternalHooks {
        &self.internal
    }

    pub fn name(&self) -> Option<&str> {
        self.internal.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.internal.name = name;
    }

    /// Element id the field `name` renders under in this form
    pub fn field_id(&self, name: &NamePath) -> Option<String> {
        name.field_id(self.name())
    }

    /// Scroll the field's input into view.
    ///
    /// Best effort: an empty name or a field that is not rendered does
    /// nothing. Returns whether a container was scrolled.
    pub fn scroll_to_field<H: ScrollHost>(
        &self,
        host: &H,
        name: impl Into<NamePath>,
        options: &ScrollOptions,
    ) -> bool {
        let name = name.into();
        let Some(id) = self.field_id(&name) else {
            trace!("scroll_to_field called with an empty name");
            return false;
        };
        let Some(node) = host.element_by_id(&id) else {
            trace!("No element rendered for field id '{}'", id);
            return false;
        };

        scroll_into_view(host, &node, options).is_some()
    }
}

impl<E> Deref for FormInstance<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.engine
    }
}

impl<E> DerefMut for FormInstance<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

/// Reuse `existing` when the caller supplied one, else start a fresh
/// instance on the default engine
pub fn use_form(existing: Option<FormInstance>) -> FormInstance {
    existing.unwrap_or_else(|| FormInstance::new(MemoryFieldStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forwards_engine_operations() {
        let mut form = use_form(None);
        form.set_field_value(NamePath::from("city"), json!("Oslo"));
        assert_eq!(form.field_value(&NamePath::from("city")), Some(json!("Oslo")));
    }

    #[test]
    fn test_reuses_supplied_instance() {
        let mut supplied = FormInstance::new(MemoryFieldStore::new());
        supplied.set_field_value(NamePath::from("kept"), json!(1));

        let form = use_form(Some(supplied));
        assert_eq!(form.field_value(&NamePath::from("kept")), Some(json!(1)));
    }

    #[test]
    fn test_field_id_uses_internal_name() {
        let mut form = use_form(None);
        let name = NamePath::from("user").push("email");
        assert_eq!(form.field_id(&name).as_deref(), Some("user_email"));

        form.set_name(Some("signup".into()));
        assert_eq!(form.field_id(&name).as_deref(), Some("signup_user_email"));
    }
}
