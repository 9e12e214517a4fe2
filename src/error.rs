//! Error types for the form layer

use thiserror::Error;

/// Errors surfaced by the form layer.
///
/// Rendering never fails; these only come out of settings loading and of
/// parsing layout/status strings supplied by callers.
#[derive(Debug, Error)]
pub enum FormError {
    /// Settings source could not be read or deserialized
    #[error("Settings error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings were read but failed validation
    #[error("Settings validation failed:\n{0}")]
    InvalidSettings(String),

    /// Unknown form layout name
    #[error("Unknown form layout: '{0}' (expected horizontal, inline or vertical)")]
    UnknownLayout(String),

    /// Unknown label alignment
    #[error("Unknown label alignment: '{0}' (expected left or right)")]
    UnknownLabelAlign(String),

    /// Unknown validation status
    #[error("Unknown validate status: '{0}' (expected success, warning, error or validating)")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
