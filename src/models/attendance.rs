//! Attendance record model and source resolution.
//!
//! This module defines the raw daily [`AttendanceRecord`] as stored upstream
//! and the [`AttendanceSource`] tagged variant that resolves, once per record,
//! which of the three data sources a record carries its numbers in.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily attendance outcome stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Employee was present for the day.
    Present,
    /// Employee was absent for the day.
    Absent,
    /// Employee arrived late.
    Late,
}

/// One raw attendance row: one employee, one day.
///
/// Rows are read-only inputs fetched from storage. A row normally carries a
/// [`AttendanceStatus`] for a single day, but manual bulk entries instead fill
/// the structured numeric columns with pre-aggregated multi-day values, and
/// legacy rows carry a JSON-encoded override in `notes`. Exactly one of those
/// sources is authoritative per row; see [`AttendanceSource::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee the row belongs to.
    pub employee_id: String,
    /// Calendar day the row tracks.
    pub date: NaiveDate,
    /// High-level attendance outcome; the last-resort counting source.
    pub status: AttendanceStatus,
    /// Clock-in time, when the employee punched in.
    #[serde(default)]
    pub check_in_time: Option<NaiveTime>,
    /// Clock-out time, when the employee punched out.
    #[serde(default)]
    pub check_out_time: Option<NaiveTime>,
    /// Structured column: pre-aggregated present-day count.
    #[serde(default)]
    pub present_days: Option<Decimal>,
    /// Structured column: pre-aggregated absent-day count.
    #[serde(default)]
    pub absent_days: Option<Decimal>,
    /// Structured column: pre-aggregated late-day count.
    #[serde(default)]
    pub late_days: Option<Decimal>,
    /// Structured column: pre-aggregated overtime hours.
    #[serde(default)]
    pub ot_hours: Option<Decimal>,
    /// Structured column: food allowance amount.
    #[serde(default)]
    pub food: Option<Decimal>,
    /// Structured column: uniform allowance amount.
    #[serde(default)]
    pub uniform: Option<Decimal>,
    /// Structured column: miscellaneous deduction amount.
    #[serde(default)]
    pub deduction: Option<Decimal>,
    /// Free-text notes; may contain a JSON-encoded override of the
    /// structured fields on legacy rows.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Returns true when any of the four structured counters
    /// (present/absent/late days, overtime hours) is present and non-zero.
    pub fn has_structured_fields(&self) -> bool {
        [
            self.present_days,
            self.absent_days,
            self.late_days,
            self.ot_hours,
        ]
        .iter()
        .flatten()
        .any(|value| !value.is_zero())
    }

    /// Elapsed hours between clock-in and clock-out, when both are present.
    ///
    /// Computed same-day; a row spanning midnight is out of scope and yields
    /// a negative duration that downstream overtime logic ignores.
    pub fn clocked_hours(&self) -> Option<Decimal> {
        let check_in = self.check_in_time?;
        let check_out = self.check_out_time?;
        let minutes = (check_out - check_in).num_minutes();
        Some(Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }
}

/// The additive numeric payload of a structured or legacy-notes row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTotals {
    /// Present-day count to add.
    pub present_days: Decimal,
    /// Absent-day count to add.
    pub absent_days: Decimal,
    /// Late-day count to add.
    pub late_days: Decimal,
    /// Overtime hours to add.
    pub ot_hours: Decimal,
    /// Food allowance amount to add.
    pub food: Decimal,
    /// Uniform allowance amount to add.
    pub uniform: Decimal,
    /// Deduction amount to add.
    pub deduction: Decimal,
}

/// The single authoritative data source of one attendance row.
///
/// Resolution is a strict priority chain; the first branch whose condition
/// holds wins and the others are skipped entirely:
///
/// 1. [`Structured`](Self::Structured) — any structured counter is present
///    and non-zero; carries all structured columns, allowances and
///    deduction included.
/// 2. [`LegacyNotes`](Self::LegacyNotes) — `notes` parses as a JSON object;
///    carries its numeric fields, each defaulting to zero.
/// 3. [`StatusOnly`](Self::StatusOnly) — everything else; counts one day by
///    the status enum.
#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceSource {
    /// Numbers come from the structured columns.
    Structured(StatTotals),
    /// Numbers come from the JSON override inside `notes`.
    LegacyNotes(StatTotals),
    /// Only the status enum is usable; count a single day from it.
    StatusOnly(AttendanceStatus),
}

impl AttendanceSource {
    /// Resolves which source is authoritative for `record`.
    ///
    /// A notes value that fails to parse, or parses to something other than
    /// an object, is logged at debug level and falls through to
    /// [`StatusOnly`](Self::StatusOnly); parse failures are never surfaced
    /// to the caller.
    pub fn resolve(record: &AttendanceRecord) -> Self {
        if record.has_structured_fields() {
            return Self::Structured(StatTotals {
                present_days: record.present_days.unwrap_or(Decimal::ZERO),
                absent_days: record.absent_days.unwrap_or(Decimal::ZERO),
                late_days: record.late_days.unwrap_or(Decimal::ZERO),
                ot_hours: record.ot_hours.unwrap_or(Decimal::ZERO),
                food: record.food.unwrap_or(Decimal::ZERO),
                uniform: record.uniform.unwrap_or(Decimal::ZERO),
                deduction: record.deduction.unwrap_or(Decimal::ZERO),
            });
        }

        if let Some(notes) = record.notes.as_deref() {
            match serde_json::from_str::<serde_json::Value>(notes) {
                Ok(serde_json::Value::Object(fields)) => {
                    // Legacy notes never carried a deduction field.
                    return Self::LegacyNotes(StatTotals {
                        present_days: numeric_field(&fields, "present_days"),
                        absent_days: numeric_field(&fields, "absent_days"),
                        late_days: numeric_field(&fields, "late_days"),
                        ot_hours: numeric_field(&fields, "ot_hours"),
                        food: numeric_field(&fields, "food"),
                        uniform: numeric_field(&fields, "uniform"),
                        deduction: Decimal::ZERO,
                    });
                }
                Ok(_) => {
                    debug!(
                        employee_id = %record.employee_id,
                        date = %record.date,
                        "notes JSON is not an object, falling back to status"
                    );
                }
                Err(err) => {
                    debug!(
                        employee_id = %record.employee_id,
                        date = %record.date,
                        error = %err,
                        "notes JSON failed to parse, falling back to status"
                    );
                }
            }
        }

        Self::StatusOnly(record.status)
    }
}

/// Reads a numeric field from a parsed notes object.
///
/// Missing fields and non-numeric stored values both coerce to zero.
fn numeric_field(fields: &serde_json::Map<String, serde_json::Value>, name: &str) -> Decimal {
    match fields.get(name) {
        Some(serde_json::Value::Number(number)) => {
            Decimal::from_str(&number.to_string()).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn status_record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "EMP001".to_string(),
            date: make_date("2024-02-05"),
            status,
            check_in_time: None,
            check_out_time: None,
            present_days: None,
            absent_days: None,
            late_days: None,
            ot_hours: None,
            food: None,
            uniform: None,
            deduction: None,
            notes: None,
        }
    }

    /// AS-001: structured columns win over notes
    #[test]
    fn test_structured_columns_win_over_notes() {
        let mut record = status_record(AttendanceStatus::Absent);
        record.present_days = Some(dec("20"));
        record.food = Some(dec("500"));
        record.notes = Some(r#"{"present_days": 99}"#.to_string());

        match AttendanceSource::resolve(&record) {
            AttendanceSource::Structured(totals) => {
                assert_eq!(totals.present_days, dec("20"));
                assert_eq!(totals.food, dec("500"));
            }
            other => panic!("Expected Structured, got {:?}", other),
        }
    }

    /// AS-002: all-zero structured columns fall through to notes
    #[test]
    fn test_zero_structured_columns_fall_through_to_notes() {
        let mut record = status_record(AttendanceStatus::Present);
        record.present_days = Some(Decimal::ZERO);
        record.ot_hours = Some(Decimal::ZERO);
        record.notes = Some(r#"{"present_days": 22, "ot_hours": 5.5}"#.to_string());

        match AttendanceSource::resolve(&record) {
            AttendanceSource::LegacyNotes(totals) => {
                assert_eq!(totals.present_days, dec("22"));
                assert_eq!(totals.ot_hours, dec("5.5"));
                assert_eq!(totals.absent_days, Decimal::ZERO);
            }
            other => panic!("Expected LegacyNotes, got {:?}", other),
        }
    }

    /// AS-003: unparseable notes fall through to status
    #[test]
    fn test_unparseable_notes_fall_through_to_status() {
        let mut record = status_record(AttendanceStatus::Late);
        record.notes = Some("called in late, traffic".to_string());

        assert_eq!(
            AttendanceSource::resolve(&record),
            AttendanceSource::StatusOnly(AttendanceStatus::Late)
        );
    }

    /// AS-004: notes parsing to a non-object falls through to status
    #[test]
    fn test_non_object_notes_fall_through_to_status() {
        let mut record = status_record(AttendanceStatus::Present);
        record.notes = Some("[1, 2, 3]".to_string());

        assert_eq!(
            AttendanceSource::resolve(&record),
            AttendanceSource::StatusOnly(AttendanceStatus::Present)
        );

        record.notes = Some("null".to_string());
        assert_eq!(
            AttendanceSource::resolve(&record),
            AttendanceSource::StatusOnly(AttendanceStatus::Present)
        );
    }

    /// AS-005: non-numeric notes fields coerce to zero
    #[test]
    fn test_non_numeric_notes_fields_coerce_to_zero() {
        let mut record = status_record(AttendanceStatus::Present);
        record.notes = Some(r#"{"present_days": "22", "ot_hours": 3}"#.to_string());

        match AttendanceSource::resolve(&record) {
            AttendanceSource::LegacyNotes(totals) => {
                assert_eq!(totals.present_days, Decimal::ZERO);
                assert_eq!(totals.ot_hours, dec("3"));
            }
            other => panic!("Expected LegacyNotes, got {:?}", other),
        }
    }

    /// AS-006: notes deduction field is ignored
    #[test]
    fn test_notes_deduction_field_is_ignored() {
        let mut record = status_record(AttendanceStatus::Present);
        record.notes = Some(r#"{"present_days": 10, "deduction": 250}"#.to_string());

        match AttendanceSource::resolve(&record) {
            AttendanceSource::LegacyNotes(totals) => {
                assert_eq!(totals.deduction, Decimal::ZERO);
            }
            other => panic!("Expected LegacyNotes, got {:?}", other),
        }
    }

    #[test]
    fn test_record_without_notes_counts_by_status() {
        let record = status_record(AttendanceStatus::Absent);
        assert_eq!(
            AttendanceSource::resolve(&record),
            AttendanceSource::StatusOnly(AttendanceStatus::Absent)
        );
    }

    #[test]
    fn test_clocked_hours_requires_both_timestamps() {
        let mut record = status_record(AttendanceStatus::Present);
        assert_eq!(record.clocked_hours(), None);

        record.check_in_time = Some(make_time("09:00:00"));
        assert_eq!(record.clocked_hours(), None);

        record.check_out_time = Some(make_time("19:30:00"));
        assert_eq!(record.clocked_hours(), Some(dec("10.5")));
    }

    #[test]
    fn test_clocked_hours_no_cross_midnight_handling() {
        let mut record = status_record(AttendanceStatus::Present);
        record.check_in_time = Some(make_time("22:00:00"));
        record.check_out_time = Some(make_time("06:00:00"));

        // Same-day arithmetic only: the elapsed value goes negative.
        assert_eq!(record.clocked_hours(), Some(dec("-16")));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "employee_id": "EMP001",
            "date": "2024-02-05",
            "status": "present"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "EMP001");
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(record.notes.is_none());
        assert!(!record.has_structured_fields());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"absent\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Late).unwrap(),
            "\"late\""
        );
    }
}
