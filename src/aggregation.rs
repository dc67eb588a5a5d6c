//! Attendance aggregation.
//!
//! This module folds raw daily attendance rows, already filtered to one
//! month's inclusive date range, into per-employee [`MonthlyStats`]. Each
//! record contributes through exactly one resolved
//! [`AttendanceSource`] branch; see that type for the priority rule.
//!
//! Two variants exist and are deliberately kept distinct. The
//! all-employees pass ([`aggregate_all`]) takes overtime only from the
//! structured and legacy-notes branches; the single-employee pass
//! ([`aggregate_employee`]) additionally credits clock-derived overtime
//! from the check-in/check-out pair on every record that carries one.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AttendanceRecord, AttendanceSource, MonthlyStats};

/// Standard workday length in hours.
///
/// Clocked time beyond it counts as overtime in the single-employee pass.
pub const STANDARD_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Aggregates a month of records into one [`MonthlyStats`] per employee.
///
/// Records are grouped by `employee_id` as stored; callers guarantee the
/// key is usable for grouping, no separate validation happens here.
/// Clock-derived overtime is NOT applied in this variant.
pub fn aggregate_all(records: &[AttendanceRecord]) -> BTreeMap<String, MonthlyStats> {
    let mut stats: BTreeMap<String, MonthlyStats> = BTreeMap::new();

    for record in records {
        let entry = stats.entry(record.employee_id.clone()).or_default();
        fold_record(entry, record);
    }

    debug!(employees = stats.len(), records = records.len(), "aggregated month");
    stats
}

/// Aggregates one employee's records for a month.
///
/// The caller passes records already fetched for a single employee. After
/// the priority chain, every record with both clock timestamps additionally
/// credits the hours beyond `standard_day_hours` as overtime, on top of
/// whatever the chain contributed.
pub fn aggregate_employee(
    records: &[AttendanceRecord],
    standard_day_hours: Decimal,
) -> MonthlyStats {
    let mut stats = MonthlyStats::default();

    for record in records {
        fold_record(&mut stats, record);
        if let Some(overtime) = clock_overtime(record, standard_day_hours) {
            stats.add_overtime(overtime);
        }
    }

    stats
}

/// Folds one record into the running totals via its resolved source.
fn fold_record(stats: &mut MonthlyStats, record: &AttendanceRecord) {
    match AttendanceSource::resolve(record) {
        AttendanceSource::Structured(totals) | AttendanceSource::LegacyNotes(totals) => {
            stats.add_totals(&totals);
        }
        AttendanceSource::StatusOnly(status) => stats.count_status(status),
    }
    stats.total_days += 1;
}

/// Clock-derived overtime: elapsed hours beyond the standard workday.
///
/// Same-day arithmetic only; a negative elapsed value (clock-out before
/// clock-in) never yields overtime.
fn clock_overtime(record: &AttendanceRecord, standard_day_hours: Decimal) -> Option<Decimal> {
    let hours = record.clocked_hours()?;
    let excess = hours - standard_day_hours;
    (excess > Decimal::ZERO).then_some(excess)
}
