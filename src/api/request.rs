//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the report,
//! payslip, and summary endpoints, and the month-selection rules they
//! share: report generation requires an explicit month, while the
//! attendance summary defaults to the current month.

use serde::{Deserialize, Serialize};

use crate::calculation::MonthSpan;
use crate::error::{EngineError, EngineResult};

/// Request body for the PF and ESI report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The month to report on, as `YYYY-MM`. Required.
    #[serde(default)]
    pub month: Option<String>,
    /// Restrict the report to one branch's employees.
    #[serde(default)]
    pub branch_id: Option<String>,
}

/// Request body for the payslip endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The month to print payslips for, as `YYYY-MM`. Required.
    #[serde(default)]
    pub month: Option<String>,
    /// Print a single employee's payslip.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Restrict payslips to one branch's employees.
    #[serde(default)]
    pub branch_id: Option<String>,
}

/// Request body for the attendance summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The month to summarize, as `YYYY-MM`; defaults to the current month.
    #[serde(default)]
    pub month: Option<String>,
    /// Summarize a single employee instead of the whole workforce.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// Resolves a required month selector.
///
/// A missing or empty selector is the pre-computation validation failure
/// [`EngineError::MonthNotSelected`]; anything else must parse as `YYYY-MM`.
pub(crate) fn require_month(month: Option<&str>) -> EngineResult<MonthSpan> {
    match month {
        None => Err(EngineError::MonthNotSelected),
        Some(value) if value.trim().is_empty() => Err(EngineError::MonthNotSelected),
        Some(value) => MonthSpan::parse(value),
    }
}

/// Resolves an optional month selector, defaulting to the current month.
pub(crate) fn month_or_current(month: Option<&str>) -> EngineResult<MonthSpan> {
    match month {
        None => Ok(MonthSpan::current()),
        Some(value) if value.trim().is_empty() => Ok(MonthSpan::current()),
        Some(value) => MonthSpan::parse(value),
    }
}
