//! Payslip figure derivation.
//!
//! The payslip block's formulas drifted from the PF/ESI reports in the
//! source system and are preserved as-is for output compatibility: the
//! earnings side uses the monthly gross rather than attendance-prorated
//! earnings, the PF base excludes overtime, and the ESI line ignores the
//! exemption threshold.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{Employee, MonthlyStats, PayslipFigures};

use super::money::round_money;

/// Derives the printable payslip figures for one employee/month pair.
pub fn derive_payslip(
    employee: &Employee,
    stats: &MonthlyStats,
    rates: &StatutoryRates,
) -> PayslipFigures {
    let monthly_gross = employee.monthly_gross();
    let ot_amount = round_money(stats.ot_hours * rates.overtime.hourly_rate);

    // PF base here is the fixed monthly components, never overtime.
    let pf_base = employee.basic_salary + employee.hra + employee.allowances;
    let pf = round_money(pf_base * rates.pf.employee_rate).min(rates.pf.employee_cap);

    // No exemption threshold on the payslip's ESI line.
    let esi = round_money(monthly_gross * rates.esi.employee_rate);

    let net_pay = monthly_gross + ot_amount - (pf + esi);

    PayslipFigures {
        employee_id: employee.employee_id.clone(),
        name: employee.name.clone(),
        position: employee.position.clone(),
        pf_number: employee.pf_number.clone(),
        esi_number: employee.esi_number.clone(),
        basic_da: monthly_gross,
        hra: employee.hra,
        conveyance: Decimal::ZERO,
        other_allowances: employee.allowances,
        ot_amount,
        pf,
        esi,
        advance: Decimal::ZERO,
        food: Decimal::ZERO,
        other_deductions: Decimal::ZERO,
        net_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            employee_id: "EMP001".to_string(),
            name: "Asha Verma".to_string(),
            position: "Machine Operator".to_string(),
            join_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
            basic_salary: dec("9000"),
            da_amount: dec("80"),
            hra: dec("2500"),
            allowances: dec("1200"),
            gross_salary: None,
            pf_number: "PF/4821".to_string(),
            esi_number: "ESI/1197".to_string(),
            branch_id: None,
        }
    }

    fn stats(ot: &str) -> MonthlyStats {
        MonthlyStats {
            present_days: dec("24"),
            ot_hours: dec(ot),
            ..MonthlyStats::default()
        }
    }

    /// PS-001: payslip from summed monthly components
    #[test]
    fn test_payslip_from_summed_components() {
        let employee = create_test_employee();
        let slip = derive_payslip(&employee, &stats("5"), &StatutoryRates::default());

        // gross = 9000 + 2500 + 1200 = 12700; ot = 300
        // pf = min(round(12700 * 0.12), 1800) = 1524; esi = round(12700 * 0.0075) = 95
        assert_eq!(slip.basic_da, dec("12700"));
        assert_eq!(slip.ot_amount, dec("300"));
        assert_eq!(slip.pf, dec("1524"));
        assert_eq!(slip.esi, dec("95"));
        assert_eq!(slip.net_pay, dec("11381"));
        assert_eq!(slip.conveyance, Decimal::ZERO);
        assert_eq!(slip.advance, Decimal::ZERO);
    }

    /// PS-002: stored gross feeds earnings and ESI but not the PF base
    #[test]
    fn test_stored_gross_does_not_change_pf_base() {
        let mut employee = create_test_employee();
        employee.gross_salary = Some(dec("20000"));
        let slip = derive_payslip(&employee, &stats("0"), &StatutoryRates::default());

        assert_eq!(slip.basic_da, dec("20000"));
        // PF still on basic + hra + allowances = 12700
        assert_eq!(slip.pf, dec("1524"));
        // ESI on the stored gross, no exemption threshold applied
        assert_eq!(slip.esi, dec("150"));
        assert_eq!(slip.net_pay, dec("18326"));
    }

    /// PS-003: payslip ESI has no exemption threshold
    #[test]
    fn test_payslip_esi_ignores_exemption_threshold() {
        let mut employee = create_test_employee();
        employee.gross_salary = Some(dec("30000"));
        let slip = derive_payslip(&employee, &stats("0"), &StatutoryRates::default());

        // 30000 is above the report exemption threshold, yet deducted here
        assert_eq!(slip.esi, dec("225"));
    }

    /// PS-004: payslip PF cap still applies
    #[test]
    fn test_payslip_pf_cap() {
        let mut employee = create_test_employee();
        employee.basic_salary = dec("40000");
        let slip = derive_payslip(&employee, &stats("0"), &StatutoryRates::default());

        // base = 40000 + 2500 + 1200 = 43700; 12% = 5244 -> capped
        assert_eq!(slip.pf, dec("1800"));
    }

    #[test]
    fn test_overtime_excluded_from_pf_base_but_paid() {
        let employee = create_test_employee();
        let with_ot = derive_payslip(&employee, &stats("10"), &StatutoryRates::default());
        let without_ot = derive_payslip(&employee, &stats("0"), &StatutoryRates::default());

        assert_eq!(with_ot.pf, without_ot.pf);
        assert_eq!(with_ot.net_pay - without_ot.net_pay, dec("600"));
    }
}
