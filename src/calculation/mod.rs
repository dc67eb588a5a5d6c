//! Payroll derivation logic.
//!
//! This module contains the month selector and the pure derivation
//! functions that turn one employee's monthly statistics and static salary
//! fields into PF, ESI, and payslip figures, including the monetary
//! rounding rule they all share.

mod earnings;
mod esi;
mod money;
mod month_span;
mod payslip;
mod pf;

pub use earnings::{EarnedPay, calculate_earnings};
pub use esi::{build_esi_report, derive_esi_line};
pub use money::round_money;
pub use month_span::MonthSpan;
pub use payslip::derive_payslip;
pub use pf::{build_pf_report, derive_pf_line};
