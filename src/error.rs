//! Error handling for swetest command building, execution and parsing.
//!
//! Covers three families of failure: invalid caller input detected while
//! configuring a request, failures of the external `swetest` process, and
//! output lines that violate the expected column contract.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwissephError {
    #[error("Invalid body selection '{value}', expected one of: {expected}")]
    InvalidSelection { value: String, expected: String },

    #[error("Invalid property '{value}', expected one of: {expected}")]
    InvalidProperty { value: String, expected: String },

    #[error("Invalid ephemeris option '{value}', expected one of: {expected}")]
    InvalidEphOption { value: String, expected: String },

    #[error("Invalid house system '{value}', expected one of: {expected}")]
    InvalidHouseSystem { value: String, expected: String },

    #[error("Invalid sidereal mode '{value}', expected an index between 0 and {max}")]
    InvalidSidereal { value: String, max: u8 },

    #[error("Invalid observer position '{value}', expected one of: {expected}")]
    InvalidObserverPosition { value: String, expected: String },

    #[error("Invalid body '{value}', expected a swisseph body index")]
    InvalidBody { value: String },

    #[error("Invalid house point '{value}', expected one of: {expected}")]
    InvalidHousePoint { value: String, expected: String },

    #[error("Planetocentric observer position requires a reference body (e.g. Earth)")]
    MissingPlanetocentricBody,

    #[error("Date/time parsing failed for '{input}': {reason}")]
    DateTimeParsing { input: String, reason: String },

    #[error("Unknown body code '{code}' in output line: {line}")]
    UnknownBody { code: String, line: String },

    #[error("Unknown house code '{code}' in output line: {line}")]
    UnknownHouse { code: String, line: String },

    #[error("swetest exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },

    #[error("swetest did not finish within {seconds:.1}s")]
    ProcessTimeout { seconds: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SwissephError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DateTimeParsing {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by caller input rather than the external process
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelection { .. }
                | Self::InvalidProperty { .. }
                | Self::InvalidEphOption { .. }
                | Self::InvalidHouseSystem { .. }
                | Self::InvalidSidereal { .. }
                | Self::InvalidObserverPosition { .. }
                | Self::InvalidBody { .. }
                | Self::InvalidHousePoint { .. }
                | Self::MissingPlanetocentricBody
                | Self::DateTimeParsing { .. }
                | Self::Configuration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SwissephError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_value_and_domain() {
        let err = SwissephError::InvalidProperty {
            value: "?".to_string(),
            expected: "l, s".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'?'"));
        assert!(message.contains("l, s"));
    }

    #[test]
    fn test_configuration_error_classification() {
        assert!(SwissephError::MissingPlanetocentricBody.is_configuration_error());
        assert!(SwissephError::datetime_parsing("x", "bad").is_configuration_error());
        assert!(
            !SwissephError::UnknownBody {
                code: "99".to_string(),
                line: "99PPPx".to_string(),
            }
            .is_configuration_error()
        );
        assert!(!SwissephError::ProcessTimeout { seconds: 10.0 }.is_configuration_error());
    }
}
