//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for generating monthly
//! statutory reports, payslip documents, and attendance summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayslipRequest, ReportRequest, SummaryRequest};
pub use response::{ApiError, SummaryResponse};
pub use state::AppState;
