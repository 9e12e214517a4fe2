//! Render model of the field-input wrapper

use crate::class_names::ClassNames;
use crate::context::FormContext;
use crate::layout::ColProps;
use crate::status::{FeedbackIcon, ValidateStatus};

/// Inputs of the field-input wrapper that shape its markup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemInputProps {
    /// Resolved form prefix, e.g. `ant-form`
    pub prefix_cls: String,
    pub wrapper_col: Option<ColProps>,
    pub has_feedback: bool,
    pub validate_status: Option<ValidateStatus>,
}

/// Icon for a status, only when feedback is enabled
pub fn feedback_icon(has_feedback: bool, status: Option<ValidateStatus>) -> Option<FeedbackIcon> {
    if has_feedback {
        status.map(|s| s.feedback_icon())
    } else {
        None
    }
}

/// Everything the wrapper needs to render, computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInputLayout {
    /// Wrapper column after local/inherited merge
    pub col: ColProps,
    /// `{prefix}-item-control` plus the column's own class
    pub control_class: String,
    pub input_class: String,
    /// Feedback icon, when feedback is on and a status is known
    pub icon: Option<FeedbackIcon>,
    pub icon_class: String,
    pub explain_class: String,
    pub extra_class: String,
    /// Context republished to anything nested in the input slot
    pub child_context: FormContext,
}

impl ItemInputLayout {
    pub fn new(props: &ItemInputProps, ctx: &FormContext) -> Self {
        let base = format!("{}-item", props.prefix_cls);
        let col = ctx.merged_wrapper_col(props.wrapper_col.as_ref());

        let control_class = ClassNames::with(format!("{}-control", base))
            .add_opt(col.class_name.clone())
            .build();

        Self {
            control_class,
            input_class: format!("{}-control-input", base),
            icon: feedback_icon(props.has_feedback, props.validate_status),
            icon_class: format!("{}-children-icon", base),
            explain_class: format!("{}-explain", base),
            extra_class: format!("{}-extra", base),
            child_context: ctx.narrowed(),
            col,
        }
    }

    /// Classes of the column element: grid classes, then the control class
    pub fn column_classes(&self) -> String {
        self.col
            .grid_classes(None)
            .add(self.control_class.clone())
            .build()
    }

    /// Classes of the explain panel with the current motion classes appended
    pub fn explain_classes(&self, motion_class: &str) -> String {
        ClassNames::with(self.explain_class.clone())
            .add(motion_class)
            .build()
    }
}

/// Messages the explain panel shows: `help` overrides the field's errors
pub fn displayed_errors(help: Option<&str>, errors: &[String]) -> Vec<String> {
    match help {
        Some(help) => vec![help.to_string()],
        None => errors.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> ItemInputProps {
        ItemInputProps {
            prefix_cls: "ant-form".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_inherits_wrapper_col_from_context() {
        let ctx = FormContext {
            wrapper_col: Some(ColProps::span(16).with_class("wide")),
            ..Default::default()
        };
        let layout = ItemInputLayout::new(&props(), &ctx);

        assert_eq!(layout.control_class, "ant-form-item-control wide");
        assert_eq!(layout.column_classes(), "ant-col ant-col-16 ant-form-item-control wide");
        assert_eq!(layout.input_class, "ant-form-item-control-input");
        assert_eq!(layout.child_context.wrapper_col, None);
    }

    #[test]
    fn test_local_wrapper_col_wins() {
        let ctx = FormContext {
            wrapper_col: Some(ColProps::span(16)),
            ..Default::default()
        };
        let props = ItemInputProps {
            wrapper_col: Some(ColProps::span(8)),
            ..props()
        };
        let layout = ItemInputLayout::new(&props, &ctx);
        assert_eq!(layout.col, ColProps::span(8));
    }

    #[test]
    fn test_icon_needs_feedback_and_status() {
        let ctx = FormContext::default();
        let mut props = ItemInputProps {
            validate_status: Some(ValidateStatus::Error),
            ..props()
        };
        assert_eq!(ItemInputLayout::new(&props, &ctx).icon, None);

        props.has_feedback = true;
        let layout = ItemInputLayout::new(&props, &ctx);
        assert_eq!(layout.icon, Some(FeedbackIcon::CloseCircleFilled));
        assert_eq!(layout.icon_class, "ant-form-item-children-icon");

        props.validate_status = None;
        assert_eq!(ItemInputLayout::new(&props, &ctx).icon, None);
    }

    #[test]
    fn test_explain_and_extra_classes() {
        let layout = ItemInputLayout::new(&props(), &FormContext::default());
        assert_eq!(
            layout.explain_classes("show-help-leave show-help-leave-active"),
            "ant-form-item-explain show-help-leave show-help-leave-active"
        );
        assert_eq!(layout.explain_classes(""), "ant-form-item-explain");
        assert_eq!(layout.extra_class, "ant-form-item-extra");
    }

    #[test]
    fn test_help_overrides_errors() {
        let errors = vec!["required".to_string()];
        assert_eq!(displayed_errors(Some("Use your work email"), &errors), vec!["Use your work email"]);
        assert_eq!(displayed_errors(None, &errors), errors);
    }
}
