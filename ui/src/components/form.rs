//! Form container component

use antform::{
    ColProps, FormInstance, FormLayout, FormModel, LabelAlign, NamePath, ScrollOptions,
};
use leptos::context::Provider;
use leptos::prelude::*;

use crate::dom::DomScrollHost;

/// Handle to a form's instance, shared by the form and its caller
pub type FormHandle = StoredValue<FormInstance, LocalStorage>;

/// Reuse the caller's handle or create one for this mount
pub fn use_form(existing: Option<FormHandle>) -> FormHandle {
    existing.unwrap_or_else(|| StoredValue::new_local(antform::use_form(None)))
}

/// Scroll the input of field `name` into view; no-op if it is not rendered
pub fn scroll_to_field(form: FormHandle, name: impl Into<NamePath>, options: &ScrollOptions) -> bool {
    let Some(host) = DomScrollHost::new() else {
        log::warn!("scroll_to_field called outside a browser window");
        return false;
    };
    let name = name.into();

    form.try_with_value(|f| f.scroll_to_field(&host, name, options))
        .unwrap_or(false)
}

/// Form container.
///
/// Publishes a [`antform::FormContext`] to the fields inside it and keeps the
/// instance's name in sync so field ids resolve.
#[component]
pub fn Form(
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] layout: FormLayout,
    #[prop(optional)] hide_required_mark: bool,
    #[prop(optional)] colon: Option<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] label_align: Option<LabelAlign>,
    #[prop(optional)] label_col: Option<ColProps>,
    #[prop(optional)] wrapper_col: Option<ColProps>,
    /// Instance to reuse; a new one is created otherwise
    #[prop(optional)] form: Option<FormHandle>,
    #[prop(optional)] on_submit: Option<Callback<FormHandle>>,
    children: Children,
) -> impl IntoView {
    let props = antform::FormProps {
        prefix_cls,
        class_name: class,
        layout,
        hide_required_mark,
        colon,
        name,
        label_align,
        label_col,
        wrapper_col,
    };
    let model = FormModel::new(&props);

    let form = use_form(form);
    form.update_value(|f| f.set_name(props.name.clone()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(on_submit) = on_submit {
            on_submit.run(form);
        }
    };

    view! {
        <form id=model.id class=model.class_name on:submit=on_form_submit>
            <Provider value=model.context>{children()}</Provider>
        </form>
    }
}
