//! Configuration types for roster admission policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Admission bounds applied to employee fields at the roster boundary.
///
/// Hours are clamped into `[min_weekly_hours, max_weekly_hours]` and the
/// salary is floor-clamped to `min_salary`. The compiled-in defaults are
/// hours in `[0, 80]` and a minimum salary of 17000.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterPolicy {
    /// The lowest admissible weekly work hours.
    pub min_weekly_hours: Decimal,
    /// The highest admissible weekly work hours.
    pub max_weekly_hours: Decimal,
    /// The lowest admissible salary.
    pub min_salary: Decimal,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            min_weekly_hours: Decimal::ZERO,
            max_weekly_hours: Decimal::new(80, 0),
            min_salary: Decimal::new(17000, 0),
        }
    }
}

impl RosterPolicy {
    /// Clamps weekly work hours into the admissible range.
    pub fn clamp_hours(&self, hours: Decimal) -> Decimal {
        hours.clamp(self.min_weekly_hours, self.max_weekly_hours)
    }

    /// Floor-clamps a salary to the admissible minimum.
    pub fn clamp_salary(&self, salary: Decimal) -> Decimal {
        salary.max(self.min_salary)
    }
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// The admission policy section.
    pub policy: RosterPolicy,
}
