//! Month selection and boundary computation.
//!
//! This module defines [`MonthSpan`], the validated `YYYY-MM` selector that
//! scopes an aggregation pass to exactly one calendar month.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// One calendar month, with inclusive first/last day bounds.
///
/// Both bounds are computed in local calendar arithmetic: the last day is
/// the first day of the next month minus one day. UTC shifting is never
/// involved, so the range cannot drift by a day across timezones.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::MonthSpan;
/// use chrono::NaiveDate;
///
/// let span = MonthSpan::parse("2024-02").unwrap();
/// assert_eq!(span.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(span.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(span.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthSpan {
    /// Parses a `YYYY-MM` selector.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when the selector is not of the
    /// form `YYYY-MM` or names a month outside `01..=12`.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            value: value.to_string(),
        };

        let (year_part, month_part) = value.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Self::from_year_month(year, month).ok_or_else(invalid)
    }

    /// The month containing today's date, from the local clock.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self::from_year_month(today.year(), today.month()).unwrap_or(Self {
            first: today,
            last: today,
        })
    }

    fn from_year_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first
            .checked_add_months(Months::new(1))?
            .pred_opt()?;
        Some(Self { first, last })
    }

    /// The first day of the month (inclusive).
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The last day of the month (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Whether `date` falls within the month, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }
}

impl fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.first.year(), self.first.month())
    }
}
