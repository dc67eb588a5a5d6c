//! The storage-read capability consumed by the engine.
//!
//! Report generation issues one read per required time range through
//! [`AttendanceStore`]; static employee and branch lists come from the
//! same seam. The engine performs no retries: a read failure is terminal
//! for the invocation and propagates unmodified.

mod memory;

pub use memory::MemoryStore;

use crate::calculation::MonthSpan;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Branch, Employee};

/// Read access to attendance rows and the static lookup lists.
pub trait AttendanceStore: Send + Sync {
    /// Fetches attendance rows within the month's inclusive bounds.
    ///
    /// Rows are returned ordered by date descending; the ordering serves
    /// display elsewhere and is not semantically significant to
    /// aggregation. Passing an employee id restricts the read to that
    /// employee's rows.
    ///
    /// # Errors
    ///
    /// [`EngineError::Storage`](crate::error::EngineError::Storage) on any
    /// read failure.
    fn fetch_attendance(
        &self,
        employee_id: Option<&str>,
        span: &MonthSpan,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Fetches the employee list, optionally restricted to one branch.
    fn fetch_employees(&self, branch_id: Option<&str>) -> EngineResult<Vec<Employee>>;

    /// Fetches the branch list.
    fn fetch_branches(&self) -> EngineResult<Vec<Branch>>;
}
