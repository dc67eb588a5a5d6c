//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{aggregate_all, aggregate_employee};
use crate::calculation::{MonthSpan, build_esi_report, build_pf_report, derive_payslip};
use crate::error::{EngineError, EngineResult};
use crate::export::{PayslipDocument, esi_report_csv, layout_payslips, pf_report_csv, report_filename};
use crate::models::{EsiReport, PfReport};

use super::request::{
    PayslipRequest, ReportRequest, SummaryRequest, month_or_current, require_month,
};
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/pf", post(pf_report_handler))
        .route("/reports/pf/csv", post(pf_report_csv_handler))
        .route("/reports/esi", post(esi_report_handler))
        .route("/reports/esi/csv", post(esi_report_csv_handler))
        .route("/payslips", post(payslips_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .with_state(state)
}

/// Handler for POST /reports/pf.
async fn pf_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PF report request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match require_month(request.month.as_deref())
        .and_then(|span| compute_pf_report(&state, &span, request.branch_id.as_deref()))
    {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                month = %report.month,
                rows = report.rows.len(),
                "PF report generated"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /reports/pf/csv.
async fn pf_report_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PF CSV export request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let span = match require_month(request.month.as_deref()) {
        Ok(span) => span,
        Err(err) => return error_response(correlation_id, err),
    };

    match compute_pf_report(&state, &span, request.branch_id.as_deref()) {
        Ok(report) => csv_response(report_filename("pf", &span), pf_report_csv(&report)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /reports/esi.
async fn esi_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ESI report request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match require_month(request.month.as_deref())
        .and_then(|span| compute_esi_report(&state, &span, request.branch_id.as_deref()))
    {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                month = %report.month,
                rows = report.rows.len(),
                "ESI report generated"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /reports/esi/csv.
async fn esi_report_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ESI CSV export request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let span = match require_month(request.month.as_deref()) {
        Ok(span) => span,
        Err(err) => return error_response(correlation_id, err),
    };

    match compute_esi_report(&state, &span, request.branch_id.as_deref()) {
        Ok(report) => csv_response(report_filename("esi", &span), esi_report_csv(&report)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /payslips.
async fn payslips_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match require_month(request.month.as_deref()).and_then(|span| {
        compute_payslips(
            &state,
            &span,
            request.employee_id.as_deref(),
            request.branch_id.as_deref(),
        )
    }) {
        Ok(document) => {
            info!(
                correlation_id = %correlation_id,
                month = %document.month,
                pages = document.pages.len(),
                "Payslip document laid out"
            );
            (StatusCode::OK, Json(document)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /attendance/summary.
async fn attendance_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match compute_summary(&state, &request) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                month = %summary.month,
                employees = summary.employees.len(),
                "Attendance summary aggregated"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// One storage read for the month, one aggregation pass, one derivation.
fn compute_pf_report(
    state: &AppState,
    span: &MonthSpan,
    branch_id: Option<&str>,
) -> EngineResult<PfReport> {
    let employees = state.store().fetch_employees(branch_id)?;
    let records = state.store().fetch_attendance(None, span)?;
    let stats = aggregate_all(&records);
    build_pf_report(span, &employees, &stats, state.config().rates(), Utc::now())
}

fn compute_esi_report(
    state: &AppState,
    span: &MonthSpan,
    branch_id: Option<&str>,
) -> EngineResult<EsiReport> {
    let employees = state.store().fetch_employees(branch_id)?;
    let records = state.store().fetch_attendance(None, span)?;
    let stats = aggregate_all(&records);
    build_esi_report(span, &employees, &stats, state.config().rates(), Utc::now())
}

/// Payslips read per employee: the single-employee aggregation variant,
/// which credits clock-derived overtime.
fn compute_payslips(
    state: &AppState,
    span: &MonthSpan,
    employee_id: Option<&str>,
    branch_id: Option<&str>,
) -> EngineResult<PayslipDocument> {
    let rates = state.config().rates();

    let employees = match employee_id {
        Some(id) => {
            let all = state.store().fetch_employees(None)?;
            let employee = all
                .into_iter()
                .find(|employee| employee.employee_id == id)
                .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
            vec![employee]
        }
        None => state.store().fetch_employees(branch_id)?,
    };

    if employees.is_empty() {
        return Err(EngineError::NoQualifyingAttendance {
            month: span.to_string(),
        });
    }

    let mut figures = Vec::with_capacity(employees.len());
    for employee in &employees {
        let records = state
            .store()
            .fetch_attendance(Some(&employee.employee_id), span)?;
        let stats = aggregate_employee(&records, rates.overtime.standard_day_hours);
        figures.push(derive_payslip(employee, &stats, rates));
    }

    Ok(layout_payslips(span, figures, Utc::now()))
}

fn compute_summary(state: &AppState, request: &SummaryRequest) -> EngineResult<SummaryResponse> {
    let span = month_or_current(request.month.as_deref())?;

    let employees = match request.employee_id.as_deref() {
        Some(id) => {
            let records = state.store().fetch_attendance(Some(id), &span)?;
            let stats =
                aggregate_employee(&records, state.config().rates().overtime.standard_day_hours);
            std::iter::once((id.to_string(), stats)).collect()
        }
        None => {
            let records = state.store().fetch_attendance(None, &span)?;
            aggregate_all(&records)
        }
    };

    Ok(SummaryResponse {
        month: span.to_string(),
        employees,
    })
}

/// Maps a JSON extraction rejection to a 400 response.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

fn csv_response(filename: String, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}
