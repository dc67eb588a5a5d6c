//! Employee State Insurance report derivation.
//!
//! Same qualifying filter and earnings computation as the PF report, with
//! the statutory exemption: gross earnings strictly above the threshold
//! contribute nothing on either side.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EsiLineItem, EsiReport, MonthlyStats};

use super::earnings::calculate_earnings;
use super::money::round_money;
use super::month_span::MonthSpan;

/// Derives one employee's ESI line item.
///
/// The exemption comparison is strict: gross earnings of exactly the
/// threshold are still contributory.
pub fn derive_esi_line(
    employee: &Employee,
    stats: &MonthlyStats,
    rates: &StatutoryRates,
) -> EsiLineItem {
    let earned = calculate_earnings(employee, stats, rates);
    let gross_earnings = earned.gross_earnings;

    let (employee_esi, employer_esi) = if gross_earnings > rates.esi.exemption_threshold {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            round_money(gross_earnings * rates.esi.employee_rate),
            round_money(gross_earnings * rates.esi.employer_rate),
        )
    };

    EsiLineItem {
        employee_id: employee.employee_id.clone(),
        name: employee.name.clone(),
        esi_number: employee.esi_number.clone(),
        days_present: stats.present_days,
        gross_earnings,
        employee_esi,
        employer_esi,
        total_esi: employee_esi + employer_esi,
    }
}

/// Builds the ESI report for one month.
///
/// # Errors
///
/// Returns [`EngineError::NoQualifyingAttendance`] when no employee has
/// qualifying attendance for the month.
pub fn build_esi_report(
    span: &MonthSpan,
    employees: &[Employee],
    stats: &BTreeMap<String, MonthlyStats>,
    rates: &StatutoryRates,
    generated_at: DateTime<Utc>,
) -> EngineResult<EsiReport> {
    let rows: Vec<EsiLineItem> = employees
        .iter()
        .filter_map(|employee| {
            let stats = stats.get(&employee.employee_id)?;
            stats
                .has_qualifying_attendance()
                .then(|| derive_esi_line(employee, stats, rates))
        })
        .collect();

    if rows.is_empty() {
        return Err(EngineError::NoQualifyingAttendance {
            month: span.to_string(),
        });
    }

    Ok(EsiReport {
        month: span.to_string(),
        generated_at,
        rows,
    })
}
