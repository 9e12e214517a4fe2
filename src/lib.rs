//! # antform - form layout and validation display
//!
//! Framework-independent core of a browser form layer: the `Form` container and
//! the field-input wrapper that sit on top of a field-state engine and a CSS
//! toolkit using `ant-*` class names.
//!
//! ## Features
//!
//! - **Class names**: prefix resolution, form layout modifiers, grid columns
//! - **Form context**: label/wrapper columns, label alignment and colons handed
//!   down to fields, narrowed for nested scopes
//! - **Error visibility**: debounced show/hide of a field's error panel with an
//!   exit-animation cache
//! - **Scroll to field**: id derivation, scroll container lookup and
//!   "only if needed" geometry
//! - **Settings**: tunables loaded with the `config` crate
//!
//! ## Quick Start
//!
//! ```rust
//! use antform::{ErrorVisibility, FormModel, FormProps, VisibilityChange};
//! use std::time::Duration;
//!
//! let model = FormModel::new(&FormProps::named("login"));
//! assert_eq!(model.class_name, "ant-form ant-form-horizontal");
//!
//! let mut errors = ErrorVisibility::new(Duration::from_millis(10));
//! let change = errors.update(&["required".to_string()], Duration::ZERO);
//! assert_eq!(change, Some(VisibilityChange::Shown));
//! ```
//!
//! ## Architecture
//!
//! - **Models**: `form` and `item` compute what the components render
//! - **State**: `visibility` holds the debounce state machine, timers are the
//!   host's job
//! - **Ports**: `engine::FieldEngine` and `scroll::ScrollHost` are the seams to
//!   the field-state engine and the element tree
//! - **Config**: settings loading and validation
//!
//! The Leptos components live in the `antform-ui` workspace member.

pub mod class_names;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod instance;
pub mod item;
pub mod layout;
pub mod prefix;
pub mod scroll;
pub mod status;
pub mod visibility;

pub use class_names::ClassNames;
pub use crate::config::{FormSettings, MotionSettings};
pub use context::FormContext;
pub use engine::{FieldEngine, FieldMeta, MemoryFieldStore};
pub use error::{FormError, Result};
pub use field::{field_id, to_name_path, NamePath, NameSegment};
pub use form::{FormModel, FormProps};
pub use instance::{use_form, FormInstance, InternalHooks};
pub use item::{displayed_errors, feedback_icon, ItemInputLayout, ItemInputProps};
pub use layout::{ColProps, ColSize, FormLayout, LabelAlign};
pub use prefix::prefix_cls;
pub use scroll::{
    compute_scroll, scroll_into_view, scrollable_container, Overflow, Rect, ScrollContainer,
    ScrollHost, ScrollMargins, ScrollOptions, ScrollPosition, Viewport,
};
pub use status::{FeedbackIcon, ValidateStatus};
pub use visibility::{
    DebounceState, DebouncedErrors, ErrorVisibility, VisibilityChange, VisibilityPhase,
    DEFAULT_DEBOUNCE,
};
