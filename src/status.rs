//! Validation status and feedback icons

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Validation state of a field, as reported by the field-state engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateStatus {
    Success,
    Warning,
    Error,
    Validating,
}

impl ValidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidateStatus::Success => "success",
            ValidateStatus::Warning => "warning",
            ValidateStatus::Error => "error",
            ValidateStatus::Validating => "validating",
        }
    }

    /// Icon shown next to the input when feedback is enabled
    pub fn feedback_icon(&self) -> FeedbackIcon {
        match self {
            ValidateStatus::Success => FeedbackIcon::CheckCircleFilled,
            ValidateStatus::Warning => FeedbackIcon::ExclamationCircleFilled,
            ValidateStatus::Error => FeedbackIcon::CloseCircleFilled,
            ValidateStatus::Validating => FeedbackIcon::Loading,
        }
    }
}

impl fmt::Display for ValidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidateStatus {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ValidateStatus::Success),
            "warning" => Ok(ValidateStatus::Warning),
            "error" => Ok(ValidateStatus::Error),
            "validating" => Ok(ValidateStatus::Validating),
            other => Err(FormError::UnknownStatus(other.to_string())),
        }
    }
}

/// Feedback icon glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackIcon {
    CheckCircleFilled,
    ExclamationCircleFilled,
    CloseCircleFilled,
    Loading,
}

impl FeedbackIcon {
    /// Icon font name, e.g. `check-circle`
    pub fn name(&self) -> &'static str {
        match self {
            FeedbackIcon::CheckCircleFilled => "check-circle",
            FeedbackIcon::ExclamationCircleFilled => "exclamation-circle",
            FeedbackIcon::CloseCircleFilled => "close-circle",
            FeedbackIcon::Loading => "loading",
        }
    }

    /// Whether the icon is drawn spinning
    pub fn spins(&self) -> bool {
        matches!(self, FeedbackIcon::Loading)
    }

    /// Classes of the icon wrapper span
    pub fn class_name(&self) -> String {
        format!("anticon anticon-{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_an_icon() {
        assert_eq!(ValidateStatus::Success.feedback_icon(), FeedbackIcon::CheckCircleFilled);
        assert_eq!(ValidateStatus::Warning.feedback_icon(), FeedbackIcon::ExclamationCircleFilled);
        assert_eq!(ValidateStatus::Error.feedback_icon(), FeedbackIcon::CloseCircleFilled);
        assert_eq!(ValidateStatus::Validating.feedback_icon(), FeedbackIcon::Loading);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("validating".parse::<ValidateStatus>().unwrap(), ValidateStatus::Validating);
        assert!(matches!(
            "pending".parse::<ValidateStatus>(),
            Err(FormError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(FeedbackIcon::Loading.class_name(), "anticon anticon-loading");
        assert!(FeedbackIcon::Loading.spins());
        assert!(!FeedbackIcon::CloseCircleFilled.spins());
    }
}
