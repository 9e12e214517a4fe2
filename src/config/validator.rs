use thiserror::Error;

use crate::config::FormSettings;
use crate::scroll::ScrollMargins;

pub const MAX_DEBOUNCE_MS: u64 = 10_000;
pub const MAX_LEAVE_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &FormSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.debounce_ms > MAX_DEBOUNCE_MS {
            errors.push(ValidationError::InvalidValue {
                field: "debounce_ms".to_string(),
                reason: format!("must be at most {}", MAX_DEBOUNCE_MS),
            });
        }

        if let Err(e) = Self::validate_motion(settings) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_margins(&settings.scroll.margins) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_motion(settings: &FormSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let motion = &settings.motion;

        if motion.name.trim().is_empty() {
            errors.push(ValidationError::MissingField("motion.name".to_string()));
        } else if motion.name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidValue {
                field: "motion.name".to_string(),
                reason: "must be a single class stem".to_string(),
            });
        }

        if motion.leave_timeout_ms > MAX_LEAVE_TIMEOUT_MS {
            errors.push(ValidationError::InvalidValue {
                field: "motion.leave_timeout_ms".to_string(),
                reason: format!("must be at most {}", MAX_LEAVE_TIMEOUT_MS),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_margins(margins: &ScrollMargins) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (side, value) in [
            ("top", margins.top),
            ("right", margins.right),
            ("bottom", margins.bottom),
            ("left", margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ValidationError::InvalidValue {
                    field: format!("scroll.margins.{}", side),
                    reason: "must be a finite, non-negative number".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
