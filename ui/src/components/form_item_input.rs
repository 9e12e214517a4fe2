//! Field-input wrapper: input slot, feedback icon, animated explain panel

use antform::{
    displayed_errors, feedback_icon, prefix_cls as resolve_prefix, ColProps, FormContext,
    ItemInputLayout, ItemInputProps, ValidateStatus,
};
use leptos::context::Provider;
use leptos::prelude::*;

use crate::components::col::Col;
use crate::components::icons::FeedbackIconView;
use crate::components::motion::use_motion;
use crate::hooks::{use_cache_errors, use_form_settings};

/// Wraps one field's control.
///
/// Errors shown below the control are debounced so a quick clear-and-refill
/// during revalidation does not flicker, and stay on screen through the leave
/// motion once they are gone. `help` replaces the errors when set.
#[component]
pub fn FormItemInput(
    /// Resolved form prefix; `ant-form` when not set
    #[prop(optional, into)]
    prefix_cls: Option<String>,
    #[prop(optional)] wrapper_col: Option<ColProps>,
    #[prop(optional, into)] errors: Signal<Vec<String>>,
    #[prop(optional, into)] help: MaybeProp<String>,
    #[prop(optional)] has_feedback: bool,
    #[prop(optional, into)] validate_status: MaybeProp<ValidateStatus>,
    #[prop(optional, into)] extra: Option<String>,
    /// `true` when errors become visible, `false` once the panel has left
    #[prop(optional)]
    on_dom_error_visible_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<FormContext>().unwrap_or_default();
    let settings = use_form_settings();

    let props = ItemInputProps {
        prefix_cls: prefix_cls.unwrap_or_else(|| resolve_prefix("form", None)),
        wrapper_col,
        has_feedback,
        validate_status: validate_status.get_untracked(),
    };
    let layout = StoredValue::new(ItemInputLayout::new(&props, &ctx));

    let notify = move |visible: bool| {
        if let Some(cb) = on_dom_error_visible_change {
            cb.run(visible);
        }
    };

    let displayed = Signal::derive(move || {
        let help = help.get();
        errors.with(|errors| displayed_errors(help.as_deref(), errors))
    });
    let (visible, cached) = use_cache_errors(
        displayed,
        settings.debounce(),
        Callback::new(move |visible: bool| {
            if visible {
                notify(true);
            }
        }),
    );

    let motion = use_motion(
        visible,
        settings.motion.name.clone(),
        settings.leave_timeout(),
        Callback::new(move |_: ()| notify(false)),
    );

    let icon = Signal::derive(move || feedback_icon(has_feedback, validate_status.get()));
    let explain_class =
        Signal::derive(move || layout.with_value(|l| l.explain_classes(&motion.class.get())));

    let (control_class, input_class, icon_class, extra_class, child_context, col) =
        layout.with_value(|l| {
            (
                l.control_class.clone(),
                l.input_class.clone(),
                l.icon_class.clone(),
                l.extra_class.clone(),
                l.child_context.clone(),
                l.col.clone(),
            )
        });

    let extra_view = extra.map(|extra| view! { <div class=extra_class>{extra}</div> });

    view! {
        <Provider value=child_context>
            <Col col=col class=control_class>
                <div class=input_class>
                    {children()}
                    {move || {
                        icon.get()
                            .map(|icon| {
                                view! {
                                    <span class=icon_class.clone()>
                                        <FeedbackIconView icon=icon />
                                    </span>
                                }
                            })
                    }}
                </div>
                <Show when=move || motion.mounted.get()>
                    <div
                        class=move || explain_class.get()
                        on:animationend=move |_| motion.finish.run(())
                        on:transitionend=move |_| motion.finish.run(())
                    >
                        {move || {
                            cached
                                .get()
                                .into_iter()
                                .map(|error| view! { <div role="alert">{error}</div> })
                                .collect_view()
                        }}
                    </div>
                </Show>
                {extra_view}
            </Col>
        </Provider>
    }
}
