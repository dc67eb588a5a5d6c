//! Statutory rate configuration types.
//!
//! This module contains the strongly-typed rate structures deserialized
//! from the statutory YAML configuration file. The `Default` values are
//! the statutory constants themselves; the file exists so rate revisions
//! do not require code changes.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Provident Fund rates.
#[derive(Debug, Clone, Deserialize)]
pub struct PfRates {
    /// Employee contribution rate against the PF-eligible gross.
    pub employee_rate: Decimal,
    /// Employer EPF sub-component rate.
    pub employer_epf_rate: Decimal,
    /// Employer EPS sub-component rate.
    pub employer_eps_rate: Decimal,
    /// Statutory ceiling on the employee contribution.
    pub employee_cap: Decimal,
}

impl Default for PfRates {
    fn default() -> Self {
        Self {
            employee_rate: Decimal::new(12, 2),
            employer_epf_rate: Decimal::new(833, 4),
            employer_eps_rate: Decimal::new(367, 4),
            employee_cap: Decimal::new(1800, 0),
        }
    }
}

/// Employee State Insurance rates.
#[derive(Debug, Clone, Deserialize)]
pub struct EsiRates {
    /// Employee contribution rate against gross earnings.
    pub employee_rate: Decimal,
    /// Employer contribution rate against gross earnings.
    pub employer_rate: Decimal,
    /// Gross earnings strictly above this are exempt from ESI.
    pub exemption_threshold: Decimal,
}

impl Default for EsiRates {
    fn default() -> Self {
        Self {
            employee_rate: Decimal::new(75, 4),
            employer_rate: Decimal::new(325, 4),
            exemption_threshold: Decimal::new(21000, 0),
        }
    }
}

/// Overtime pay rates.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeRates {
    /// Flat overtime pay per hour, in currency units.
    pub hourly_rate: Decimal,
    /// Standard workday length in hours; clocked time beyond it is overtime.
    pub standard_day_hours: Decimal,
}

impl Default for OvertimeRates {
    fn default() -> Self {
        Self {
            hourly_rate: Decimal::new(60, 0),
            standard_day_hours: Decimal::new(8, 0),
        }
    }
}

/// The complete statutory rate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatutoryRates {
    /// Provident Fund rates.
    #[serde(default)]
    pub pf: PfRates,
    /// Employee State Insurance rates.
    #[serde(default)]
    pub esi: EsiRates,
    /// Overtime rates.
    #[serde(default)]
    pub overtime: OvertimeRates,
}
