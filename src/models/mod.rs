//! Data models for the payroll engine.
//!
//! This module contains the value types shared by the aggregation and
//! payroll derivation stages: attendance records and their resolved
//! sources, per-employee monthly statistics, static employee and branch
//! records, and the derived report line items.

mod attendance;
mod employee;
mod monthly_stats;
mod report_line;

pub use attendance::{AttendanceRecord, AttendanceSource, AttendanceStatus, StatTotals};
pub use employee::{Branch, Employee};
pub use monthly_stats::MonthlyStats;
pub use report_line::{EsiLineItem, EsiReport, PayslipFigures, PfLineItem, PfReport};
