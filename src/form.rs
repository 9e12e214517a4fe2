//! Render model of the form container

use crate::class_names::ClassNames;
use crate::context::FormContext;
use crate::layout::{ColProps, FormLayout, LabelAlign};
use crate::prefix::prefix_cls;

/// Props of the form container that the form layer itself consumes.
///
/// Anything else a caller configures belongs to the field-state engine and is
/// passed through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormProps {
    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
    pub layout: FormLayout,
    pub hide_required_mark: bool,
    pub colon: Option<bool>,
    pub name: Option<String>,
    pub label_align: Option<LabelAlign>,
    pub label_col: Option<ColProps>,
    pub wrapper_col: Option<ColProps>,
}

impl FormProps {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_layout(mut self, layout: FormLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_label_col(mut self, col: ColProps) -> Self {
        self.label_col = Some(col);
        self
    }

    pub fn with_wrapper_col(mut self, col: ColProps) -> Self {
        self.wrapper_col = Some(col);
        self
    }
}

/// What the form container renders
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub prefix_cls: String,
    pub class_name: String,
    /// `id` of the `<form>` element
    pub id: Option<String>,
    pub context: FormContext,
}

impl FormModel {
    pub fn new(props: &FormProps) -> Self {
        let prefix = prefix_cls("form", props.prefix_cls.as_deref());

        let class_name = ClassNames::with(prefix.clone())
            .add(format!("{}-{}", prefix, props.layout))
            .add_if(props.hide_required_mark, format!("{}-hide-required-mark", prefix))
            .add_opt(props.class_name.clone())
            .build();

        let context = FormContext {
            name: props.name.clone(),
            label_align: props.label_align,
            label_col: props.label_col.clone(),
            wrapper_col: props.wrapper_col.clone(),
            vertical: props.layout.is_vertical(),
            colon: props.colon,
        };

        Self {
            prefix_cls: prefix,
            class_name,
            id: props.name.clone(),
            context,
        }
    }
}
