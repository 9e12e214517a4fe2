//! Leptos components for antform
//!
//! [`Form`] publishes the form context and owns the form instance,
//! [`FormItemInput`] wraps one field's control with its feedback icon and
//! debounced, animated error panel.

mod components;
mod dom;
mod hooks;

#[cfg(feature = "demo")]
mod demo;

pub use components::{
    motion_class, scroll_to_field, use_form, use_motion, Col, FeedbackIconView, Form,
    FormHandle, FormItemInput, Motion, MotionHandle, MotionPhase,
};
pub use dom::DomScrollHost;
pub use hooks::{now, provide_form_settings, use_cache_errors, use_form_settings};

/// Route panics and `log` records to the browser console
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
