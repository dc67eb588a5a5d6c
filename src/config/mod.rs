//! Statutory rate configuration for the payroll engine.
//!
//! This module provides functionality to load the statutory deduction
//! rates (PF, ESI, overtime) from a YAML file, with defaults matching the
//! current statutory values.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory").unwrap();
//! println!("PF cap: {}", config.rates().pf.employee_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EsiRates, OvertimeRates, PfRates, StatutoryRates};
