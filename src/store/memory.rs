//! In-memory store implementation.

use std::sync::RwLock;

use crate::calculation::MonthSpan;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Branch, Employee};

use super::AttendanceStore;

/// An in-memory [`AttendanceStore`] for tests, benches, and embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    employees: Vec<Employee>,
    branches: Vec<Branch>,
    records: Vec<AttendanceRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the store.
    pub fn insert_employee(&self, employee: Employee) -> EngineResult<()> {
        self.write()?.employees.push(employee);
        Ok(())
    }

    /// Adds a branch to the store.
    pub fn insert_branch(&self, branch: Branch) -> EngineResult<()> {
        self.write()?.branches.push(branch);
        Ok(())
    }

    /// Adds an attendance record to the store.
    pub fn insert_record(&self, record: AttendanceRecord) -> EngineResult<()> {
        self.write()?.records.push(record);
        Ok(())
    }

    fn read(&self) -> EngineResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| EngineError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| EngineError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl AttendanceStore for MemoryStore {
    fn fetch_attendance(
        &self,
        employee_id: Option<&str>,
        span: &MonthSpan,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let inner = self.read()?;
        let mut rows: Vec<AttendanceRecord> = inner
            .records
            .iter()
            .filter(|record| span.contains(record.date))
            .filter(|record| {
                employee_id.is_none_or(|id| record.employee_id == id)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    fn fetch_employees(&self, branch_id: Option<&str>) -> EngineResult<Vec<Employee>> {
        let inner = self.read()?;
        Ok(inner
            .employees
            .iter()
            .filter(|employee| {
                branch_id.is_none_or(|id| employee.branch_id.as_deref() == Some(id))
            })
            .cloned()
            .collect())
    }

    fn fetch_branches(&self) -> EngineResult<Vec<Branch>> {
        Ok(self.read()?.branches.clone())
    }
}
