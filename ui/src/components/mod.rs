pub mod col;
pub mod form;
pub mod form_item_input;
pub mod icons;
pub mod motion;

pub use col::Col;
pub use form::{scroll_to_field, use_form, Form, FormHandle};
pub use form_item_input::FormItemInput;
pub use icons::FeedbackIconView;
pub use motion::{motion_class, use_motion, Motion, MotionHandle, MotionPhase};
