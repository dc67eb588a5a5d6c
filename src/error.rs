//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during report generation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     value: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "invalid month selector '2024-13': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A report was requested without selecting a month.
    ///
    /// Raised before any storage read or computation begins.
    #[error("no month selected")]
    MonthNotSelected,

    /// The month selector could not be parsed as `YYYY-MM`.
    #[error("invalid month selector '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The selector value that failed to parse.
        value: String,
    },

    /// A month was selected but no employee has qualifying attendance.
    ///
    /// Distinct from a hard failure: the invocation aborts without
    /// producing a document.
    #[error("no qualifying attendance for {month}")]
    NoQualifyingAttendance {
        /// The selected month, formatted as `YYYY-MM`.
        month: String,
    },

    /// A payslip or summary was requested for an unknown employee.
    #[error("employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// The upstream storage read failed.
    ///
    /// Propagated unmodified to the caller; the engine performs no retry.
    #[error("storage read failed: {message}")]
    Storage {
        /// A description of the read failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_not_selected_display() {
        let error = EngineError::MonthNotSelected;
        assert_eq!(error.to_string(), "no month selected");
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "Feb-2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid month selector 'Feb-2024': expected YYYY-MM"
        );
    }

    #[test]
    fn test_no_qualifying_attendance_displays_month() {
        let error = EngineError::NoQualifyingAttendance {
            month: "2024-02".to_string(),
        };
        assert_eq!(error.to_string(), "no qualifying attendance for 2024-02");
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "EMP042".to_string(),
        };
        assert_eq!(error.to_string(), "employee not found: EMP042");
    }

    #[test]
    fn test_storage_displays_message() {
        let error = EngineError::Storage {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "storage read failed: connection reset");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/statutory.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "configuration file not found: /missing/statutory.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_month_not_selected() -> EngineResult<()> {
            Err(EngineError::MonthNotSelected)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_month_not_selected()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
