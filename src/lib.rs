//! Attendance aggregation and statutory payroll reporting engine.
//!
//! This crate turns raw daily attendance rows into per-employee monthly
//! statistics and derives Provident Fund, Employee State Insurance, and
//! payslip figures from them, serialized as quoted CSV reports or a
//! paginated payslip page layout.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
