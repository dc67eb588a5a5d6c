//! Quoted CSV serialization for the statutory reports.
//!
//! The format is fixed: a header row of named columns, every field (headers
//! included) double-quoted, fields joined by commas, rows joined by
//! newlines. Numeric fields render as plain decimal text.

use rust_decimal::Decimal;

use crate::calculation::MonthSpan;
use crate::models::{EsiReport, PfReport};

const PF_HEADER: [&str; 9] = [
    "Employee No",
    "Name",
    "PF Number",
    "Days Present",
    "PF Basic",
    "Employee Contribution",
    "Employer EPF",
    "Employer EPS",
    "Total Employer Contribution",
];

const ESI_HEADER: [&str; 8] = [
    "Employee No",
    "Name",
    "ESI Number",
    "Days Present",
    "Gross Earnings",
    "Employee ESI",
    "Employer ESI",
    "Total ESI",
];

/// Serializes a PF report to CSV text.
pub fn pf_report_csv(report: &PfReport) -> String {
    let rows = report.rows.iter().map(|row| {
        vec![
            row.employee_id.clone(),
            row.name.clone(),
            row.pf_number.clone(),
            decimal_text(row.days_present),
            decimal_text(row.pf_basic),
            decimal_text(row.employee_contribution),
            decimal_text(row.employer_epf),
            decimal_text(row.employer_eps),
            decimal_text(row.employer_total),
        ]
    });
    render(&PF_HEADER, rows)
}

/// Serializes an ESI report to CSV text.
pub fn esi_report_csv(report: &EsiReport) -> String {
    let rows = report.rows.iter().map(|row| {
        vec![
            row.employee_id.clone(),
            row.name.clone(),
            row.esi_number.clone(),
            decimal_text(row.days_present),
            decimal_text(row.gross_earnings),
            decimal_text(row.employee_esi),
            decimal_text(row.employer_esi),
            decimal_text(row.total_esi),
        ]
    });
    render(&ESI_HEADER, rows)
}

/// The download filename for a report: `{report_type}_report_{YYYY-MM}.csv`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::MonthSpan;
/// use payroll_engine::export::report_filename;
///
/// let span = MonthSpan::parse("2024-02").unwrap();
/// assert_eq!(report_filename("pf", &span), "pf_report_2024-02.csv");
/// ```
pub fn report_filename(report_type: &str, span: &MonthSpan) -> String {
    format!("{report_type}_report_{span}.csv")
}

fn render(header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut lines = Vec::new();
    lines.push(render_row(header.iter().map(|field| (*field).to_string())));
    for row in rows {
        lines.push(render_row(row.into_iter()));
    }
    lines.join("\n")
}

fn render_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| quote(&field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Double-quotes a field, doubling any embedded quote.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Renders a decimal as plain text, trailing zeros stripped.
fn decimal_text(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EsiLineItem, PfLineItem};
    use chrono::Utc;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pf_report() -> PfReport {
        PfReport {
            month: "2024-02".to_string(),
            generated_at: Utc::now(),
            rows: vec![PfLineItem {
                employee_id: "EMP001".to_string(),
                name: "Asha Verma".to_string(),
                pf_number: "PF/4821".to_string(),
                days_present: dec("25"),
                pf_basic: dec("300600"),
                employee_contribution: dec("1800"),
                employer_epf: dec("25040"),
                employer_eps: dec("11032"),
                employer_total: dec("36072"),
            }],
        }
    }

    /// CSV-001: every field is double-quoted, rows newline-joined
    #[test]
    fn test_pf_csv_shape() {
        let csv = pf_report_csv(&pf_report());
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"Employee No\",\"Name\",\"PF Number\",\"Days Present\",\"PF Basic\",\
             \"Employee Contribution\",\"Employer EPF\",\"Employer EPS\",\
             \"Total Employer Contribution\""
        );
        assert_eq!(
            lines[1],
            "\"EMP001\",\"Asha Verma\",\"PF/4821\",\"25\",\"300600\",\"1800\",\"25040\",\"11032\",\"36072\""
        );
    }

    /// CSV-002: embedded quotes are doubled
    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut report = pf_report();
        report.rows[0].name = "Asha \"Ash\" Verma".to_string();

        let csv = pf_report_csv(&report);
        assert!(csv.contains("\"Asha \"\"Ash\"\" Verma\""));
    }

    /// CSV-003: decimals render without trailing zeros
    #[test]
    fn test_decimal_fields_are_normalized() {
        let mut report = pf_report();
        report.rows[0].days_present = dec("25.0");

        let csv = pf_report_csv(&report);
        assert!(csv.contains("\"25\""));
        assert!(!csv.contains("\"25.0\""));
    }

    #[test]
    fn test_esi_csv_shape() {
        let report = EsiReport {
            month: "2024-02".to_string(),
            generated_at: Utc::now(),
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

        let csv = esi_report_csv(&report);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"Employee No\",\"Name\",\"ESI Number\""));
        assert_eq!(
            lines[1],
            "\"EMP001\",\"Asha Verma\",\"ESI/1197\",\"21\",\"10080\",\"76\",\"328\",\"404\""
        );
    }

    #[test]
    fn test_report_filenames() {
        let span = MonthSpan::parse("2024-02").unwrap();
        assert_eq!(report_filename("pf", &span), "pf_report_2024-02.csv");
        assert_eq!(report_filename("esi", &span), "esi_report_2024-02.csv");
    }

    #[test]
    fn test_fractional_days_render_as_decimal_text() {
        let mut report = pf_report();
        report.rows[0].days_present = dec("21.5");

        let csv = pf_report_csv(&report);
        assert!(csv.contains("\"21.5\""));
    }
}
