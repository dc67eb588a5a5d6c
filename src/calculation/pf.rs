//! Provident Fund report derivation.
//!
//! One PF line per qualifying employee: 12% employee contribution against
//! the PF-eligible gross, capped at the statutory ceiling, with the
//! employer's 12% split into its EPF and EPS sub-components.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, MonthlyStats, PfLineItem, PfReport};

use super::earnings::calculate_earnings;
use super::money::round_money;
use super::month_span::MonthSpan;

/// Derives one employee's PF line item.
///
/// The PF-eligible gross includes the overtime amount. The employee
/// contribution is 12% of it, capped at the statutory ceiling; the employer
/// EPF (8.33%) and EPS (3.67%) components are each rounded independently,
/// so they need not sum exactly to 12%.
pub fn derive_pf_line(
    employee: &Employee,
    stats: &MonthlyStats,
    rates: &StatutoryRates,
) -> PfLineItem {
    let earned = calculate_earnings(employee, stats, rates);
    let pf_basic = earned.gross_earnings;

    let employee_contribution =
        round_money(pf_basic * rates.pf.employee_rate).min(rates.pf.employee_cap);
    let employer_epf = round_money(pf_basic * rates.pf.employer_epf_rate);
    let employer_eps = round_money(pf_basic * rates.pf.employer_eps_rate);

    PfLineItem {
        employee_id: employee.employee_id.clone(),
        name: employee.name.clone(),
        pf_number: employee.pf_number.clone(),
        days_present: stats.present_days,
        pf_basic,
        employee_contribution,
        employer_epf,
        employer_eps,
        employer_total: employer_epf + employer_eps,
    }
}

/// Builds the PF report for one month.
///
/// Employees with zero days present and zero overtime hours are filtered
/// out before any computation; an employee without statistics at all is
/// treated the same way.
///
/// # Errors
///
/// Returns [`EngineError::NoQualifyingAttendance`] when no employee
/// qualifies, so callers report the empty month distinctly from a hard
/// failure instead of emitting an empty document.
pub fn build_pf_report(
    span: &MonthSpan,
    employees: &[Employee],
    stats: &BTreeMap<String, MonthlyStats>,
    rates: &StatutoryRates,
    generated_at: DateTime<Utc>,
) -> EngineResult<PfReport> {
    let rows: Vec<PfLineItem> = employees
        .iter()
        .filter_map(|employee| {
            let stats = stats.get(&employee.employee_id)?;
            stats
                .has_qualifying_attendance()
                .then(|| derive_pf_line(employee, stats, rates))
        })
        .collect();

    if rows.is_empty() {
        return Err(EngineError::NoQualifyingAttendance {
            month: span.to_string(),
        });
    }

    Ok(PfReport {
        month: span.to_string(),
        generated_at,
        rows,
    })
}
