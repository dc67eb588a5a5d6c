//! Per-employee monthly attendance statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceStatus, StatTotals};

/// Accumulated attendance statistics for one employee over one month.
///
/// Created empty, mutated once per matching attendance record during a
/// single aggregation pass, and treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Days the employee was present.
    pub present_days: Decimal,
    /// Days the employee was absent.
    pub absent_days: Decimal,
    /// Days the employee was late.
    pub late_days: Decimal,
    /// Overtime hours worked (fractional).
    pub ot_hours: Decimal,
    /// Food allowance accumulated over the month.
    pub food: Decimal,
    /// Uniform allowance accumulated over the month.
    pub uniform: Decimal,
    /// Miscellaneous deductions accumulated over the month.
    pub deduction: Decimal,
    /// Number of attendance records folded into these statistics.
    pub total_days: u32,
}

impl MonthlyStats {
    /// Adds a structured or legacy-notes payload to the running totals.
    pub fn add_totals(&mut self, totals: &StatTotals) {
        self.present_days += totals.present_days;
        self.absent_days += totals.absent_days;
        self.late_days += totals.late_days;
        self.ot_hours += totals.ot_hours;
        self.food += totals.food;
        self.uniform += totals.uniform;
        self.deduction += totals.deduction;
    }

    /// Counts a single day from the status enum; no other field changes.
    pub fn count_status(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present_days += Decimal::ONE,
            AttendanceStatus::Absent => self.absent_days += Decimal::ONE,
            AttendanceStatus::Late => self.late_days += Decimal::ONE,
        }
    }

    /// Adds clock-derived overtime hours.
    pub fn add_overtime(&mut self, hours: Decimal) {
        self.ot_hours += hours;
    }

    /// Returns true when the month has any payable attendance.
    ///
    /// Employees without qualifying attendance are excluded from the PF and
    /// ESI reports before any computation.
    pub fn has_qualifying_attendance(&self) -> bool {
        !self.present_days.is_zero() || !self.ot_hours.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_stats_are_empty() {
        let stats = MonthlyStats::default();
        assert_eq!(stats.present_days, Decimal::ZERO);
        assert_eq!(stats.ot_hours, Decimal::ZERO);
        assert_eq!(stats.total_days, 0);
        assert!(!stats.has_qualifying_attendance());
    }

    #[test]
    fn test_add_totals_is_additive() {
        let mut stats = MonthlyStats::default();
        stats.add_totals(&StatTotals {
            present_days: dec("20"),
            absent_days: dec("2"),
            late_days: dec("1"),
            ot_hours: dec("5.5"),
            food: dec("300"),
            uniform: dec("150"),
            deduction: dec("75"),
        });
        stats.add_totals(&StatTotals {
            present_days: dec("3"),
            ot_hours: dec("1.5"),
            ..StatTotals::default()
        });

        assert_eq!(stats.present_days, dec("23"));
        assert_eq!(stats.absent_days, dec("2"));
        assert_eq!(stats.late_days, dec("1"));
        assert_eq!(stats.ot_hours, dec("7"));
        assert_eq!(stats.food, dec("300"));
        assert_eq!(stats.uniform, dec("150"));
        assert_eq!(stats.deduction, dec("75"));
    }

    #[test]
    fn test_count_status_touches_exactly_one_counter() {
        let mut stats = MonthlyStats::default();
        stats.count_status(AttendanceStatus::Present);
        stats.count_status(AttendanceStatus::Present);
        stats.count_status(AttendanceStatus::Absent);
        stats.count_status(AttendanceStatus::Late);

        assert_eq!(stats.present_days, dec("2"));
        assert_eq!(stats.absent_days, dec("1"));
        assert_eq!(stats.late_days, dec("1"));
        assert_eq!(stats.ot_hours, Decimal::ZERO);
        assert_eq!(stats.food, Decimal::ZERO);
    }

    #[test]
    fn test_qualifying_attendance_from_overtime_only() {
        let mut stats = MonthlyStats::default();
        assert!(!stats.has_qualifying_attendance());

        stats.add_overtime(dec("2.5"));
        assert!(stats.has_qualifying_attendance());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut stats = MonthlyStats::default();
        stats.count_status(AttendanceStatus::Present);
        stats.add_overtime(dec("1.25"));
        stats.total_days = 1;

        let json = serde_json::to_string(&stats).unwrap();
        let back: MonthlyStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
