//! Sign-up form mounted on wasm start

use antform::{ColProps, FieldEngine, FormLayout, FormSettings, NamePath, ValidateStatus};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::components::{scroll_to_field, use_form, Form, FormItemInput, Motion};
use crate::hooks::provide_form_settings;

const EMAIL: &str = "email";

fn validate_email(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        vec!["Please input your email".to_string()]
    } else if !value.contains('@') {
        vec!["Not a valid email".to_string()]
    } else {
        Vec::new()
    }
}

#[component]
fn App() -> impl IntoView {
    let settings = FormSettings::default();
    let scroll = settings.scroll.clone();
    provide_form_settings(settings);

    let form = use_form(None);
    let errors = RwSignal::new(Vec::<String>::new());
    let status = RwSignal::new(None::<ValidateStatus>);
    let submitted = RwSignal::new(None::<String>);

    let validate = move |value: String| {
        let found = validate_email(&value);
        form.update_value(|f| {
            f.set_field_value(NamePath::from(EMAIL), serde_json::Value::String(value));
            f.set_field_errors(NamePath::from(EMAIL), found.clone());
        });
        status.set(form.with_value(|f| f.field_status(&NamePath::from(EMAIL))));
        errors.set(found);
    };

    let on_submit = Callback::new(move |form: crate::FormHandle| {
        let value = form
            .with_value(|f| f.field_value(&NamePath::from(EMAIL)))
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        validate(value);

        if errors.with_untracked(|e| e.is_empty()) {
            let values = form.with_value(|f| f.field_values());
            submitted.set(Some(values.to_string()));
        } else {
            submitted.set(None);
            scroll_to_field(form, EMAIL, &scroll);
        }
    });

    view! {
        <Form
            name="signup"
            layout=FormLayout::Horizontal
            label_col=ColProps::span(6)
            wrapper_col=ColProps::span(14)
            form=form
            on_submit=on_submit
        >
            <div style="height: 120vh">"Scroll down to the field"</div>
            <FormItemInput
                errors=errors
                has_feedback=true
                validate_status=Signal::derive(move || status.get())
                extra="We never share your email"
                on_dom_error_visible_change=Callback::new(move |visible: bool| {
                    log::info!("email errors visible: {}", visible);
                })
            >
                <input
                    id="signup_email"
                    class="ant-input"
                    on:input=move |ev| validate(event_target_value(&ev))
                />
            </FormItemInput>
            <button type="submit">"Sign up"</button>
            <Motion visible=Signal::derive(move || submitted.get().is_some()) name="fade">
                <pre>{move || submitted.get().unwrap_or_default()}</pre>
            </Motion>
        </Form>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    crate::init_logging(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
