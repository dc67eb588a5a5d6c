//! Attendance-prorated earnings shared by the PF and ESI reports.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{Employee, MonthlyStats};

use super::money::round_money;

/// The earnings of one employee for one month, prorated by days present.
#[derive(Debug, Clone, PartialEq)]
pub struct EarnedPay {
    /// Earned basic: per-day basic rate times days present, rounded.
    pub earned_basic: Decimal,
    /// Earned DA: per-day dearness allowance times days present, rounded.
    pub earned_da: Decimal,
    /// Overtime amount: overtime hours times the statutory hourly rate, rounded.
    pub ot_amount: Decimal,
    /// Gross earnings: earned basic + earned DA + overtime amount.
    pub gross_earnings: Decimal,
}

/// Computes the attendance-prorated earnings for one employee/month pair.
///
/// Each component is rounded independently (half away from zero) before
/// summation; the gross is the sum of the already-rounded parts.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_earnings;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::{Employee, MonthlyStats};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     employee_id: "EMP001".to_string(),
///     name: "Asha Verma".to_string(),
///     position: "Operator".to_string(),
///     join_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
///     basic_salary: Decimal::from_str("10000").unwrap(),
///     da_amount: Decimal::from_str("2000").unwrap(),
///     hra: Decimal::ZERO,
///     allowances: Decimal::ZERO,
///     gross_salary: None,
///     pf_number: "PF/1".to_string(),
///     esi_number: "ESI/1".to_string(),
///     branch_id: None,
/// };
/// let stats = MonthlyStats {
///     present_days: Decimal::from_str("25").unwrap(),
///     ot_hours: Decimal::from_str("10").unwrap(),
///     ..MonthlyStats::default()
/// };
///
/// let earned = calculate_earnings(&employee, &stats, &StatutoryRates::default());
/// assert_eq!(earned.earned_basic, Decimal::from_str("250000").unwrap());
/// assert_eq!(earned.earned_da, Decimal::from_str("50000").unwrap());
/// assert_eq!(earned.ot_amount, Decimal::from_str("600").unwrap());
/// assert_eq!(earned.gross_earnings, Decimal::from_str("300600").unwrap());
/// ```
pub fn calculate_earnings(
    employee: &Employee,
    stats: &MonthlyStats,
    rates: &StatutoryRates,
) -> EarnedPay {
    let earned_basic = round_money(employee.basic_salary * stats.present_days);
    let earned_da = round_money(employee.da_amount * stats.present_days);
    let ot_amount = round_money(stats.ot_hours * rates.overtime.hourly_rate);

    EarnedPay {
        earned_basic,
        earned_da,
        ot_amount,
        gross_earnings: earned_basic + earned_da + ot_amount,
    }
}
