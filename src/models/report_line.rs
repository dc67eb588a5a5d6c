//! Derived payroll report rows.
//!
//! Line items are ephemeral: computed from one [`Employee`](super::Employee)
//! and one [`MonthlyStats`](super::MonthlyStats) pair, held only for the
//! duration of an export, never persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the Provident Fund report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfLineItem {
    /// Employee number.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// PF account number.
    pub pf_number: String,
    /// Days present in the selected month.
    pub days_present: Decimal,
    /// PF-eligible gross: earned basic + earned DA + overtime amount.
    pub pf_basic: Decimal,
    /// Employee contribution: 12% of PF basic, capped at the statutory ceiling.
    pub employee_contribution: Decimal,
    /// Employer EPF sub-component (8.33%).
    pub employer_epf: Decimal,
    /// Employer EPS sub-component (3.67%).
    pub employer_eps: Decimal,
    /// Total employer contribution (EPF + EPS).
    pub employer_total: Decimal,
}

/// One row of the Employee State Insurance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsiLineItem {
    /// Employee number.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// ESI account number.
    pub esi_number: String,
    /// Days present in the selected month.
    pub days_present: Decimal,
    /// Gross earnings: earned basic + earned DA + overtime amount.
    pub gross_earnings: Decimal,
    /// Employee ESI contribution (0.75%, zero above the exemption threshold).
    pub employee_esi: Decimal,
    /// Employer ESI contribution (3.25%, zero above the exemption threshold).
    pub employer_esi: Decimal,
    /// Total ESI (employee + employer).
    pub total_esi: Decimal,
}

/// The figures printed on one employee's payslip for one month.
///
/// The payslip block deliberately uses formulas that differ from the PF and
/// ESI reports (monthly gross instead of attendance-prorated earnings, an
/// OT-free PF base, no ESI exemption threshold); the drift is preserved
/// per component for output compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipFigures {
    /// Employee number.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Job position, printed in the employee-info strip.
    pub position: String,
    /// PF account number, printed in the footer.
    pub pf_number: String,
    /// ESI account number, printed in the footer.
    pub esi_number: String,
    /// Earnings: Basic+DA line, the monthly gross.
    pub basic_da: Decimal,
    /// Earnings: house rent allowance.
    pub hra: Decimal,
    /// Earnings: conveyance, always zero.
    pub conveyance: Decimal,
    /// Earnings: other allowances.
    pub other_allowances: Decimal,
    /// Earnings: overtime amount.
    pub ot_amount: Decimal,
    /// Deductions: Provident Fund.
    pub pf: Decimal,
    /// Deductions: Employee State Insurance.
    pub esi: Decimal,
    /// Deductions: salary advance, always zero.
    pub advance: Decimal,
    /// Deductions: food, always zero on the payslip.
    pub food: Decimal,
    /// Deductions: other, always zero.
    pub other_deductions: Decimal,
    /// Net pay: monthly gross + overtime − (PF + ESI).
    pub net_pay: Decimal,
}

/// The Provident Fund report for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PfReport {
    /// The selected month, formatted as `YYYY-MM`.
    pub month: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per qualifying employee.
    pub rows: Vec<PfLineItem>,
}

/// The Employee State Insurance report for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsiReport {
    /// The selected month, formatted as `YYYY-MM`.
    pub month: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One row per qualifying employee.
    pub rows: Vec<EsiLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pf_line_item_serializes_decimals_as_strings() {
        let line = PfLineItem {
            employee_id: "EMP001".to_string(),
            name: "Asha Verma".to_string(),
            pf_number: "PF/4821".to_string(),
            days_present: dec("25"),
            pf_basic: dec("300600"),
            employee_contribution: dec("1800"),
            employer_epf: dec("25040"),
            employer_eps: dec("11032"),
            employer_total: dec("36072"),
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"pf_basic\":\"300600\""));
        assert!(json.contains("\"employee_contribution\":\"1800\""));

        let back: PfLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_esi_report_round_trip() {
        let report = EsiReport {
            month: "2024-02".to_string(),
            generated_at: "2024-03-01T09:30:00Z".parse().unwrap(),
            rows: vec![EsiLineItem {
                employee_id: "EMP001".to_string(),
                name: "Asha Verma".to_string(),
                esi_number: "ESI/1197".to_string(),
                days_present: dec("21"),
                gross_earnings: dec("10080"),
                employee_esi: dec("76"),
                employer_esi: dec("328"),
                total_esi: dec("404"),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: EsiReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
