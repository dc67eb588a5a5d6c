//! Employee and branch models.
//!
//! This module defines the static payroll attributes of an [`Employee`] and
//! the [`Branch`] lookup record the surrounding application manages.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Static payroll attributes of one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// Job position or title.
    pub position: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Per-day basic salary rate.
    pub basic_salary: Decimal,
    /// Per-day dearness allowance rate.
    pub da_amount: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly other allowances.
    pub allowances: Decimal,
    /// Stored monthly gross salary, when maintained explicitly.
    #[serde(default)]
    pub gross_salary: Option<Decimal>,
    /// Provident Fund account number.
    pub pf_number: String,
    /// Employee State Insurance account number.
    pub esi_number: String,
    /// Branch the employee is posted to, if any.
    #[serde(default)]
    pub branch_id: Option<String>,
}

impl Employee {
    /// The monthly gross used by the payslip earnings block.
    ///
    /// Prefers the stored `gross_salary`; otherwise sums the fixed monthly
    /// components. This is deliberately NOT the attendance-prorated earned
    /// amount the PF/ESI reports use.
    pub fn monthly_gross(&self) -> Decimal {
        self.gross_salary
            .unwrap_or(self.basic_salary + self.hra + self.allowances)
    }
}

/// A branch office; a static lookup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier for the branch.
    pub branch_id: String,
    /// The branch's display name.
    pub name: String,
    /// Postal address of the branch.
    pub address: String,
}
