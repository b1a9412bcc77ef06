//! Performance rating calculation.
//!
//! This module provides the formula that derives an employee's integer
//! performance rating from their completed work, weekly work hours, and
//! salary.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{RosterError, RosterResult};

/// The scale factor applied to the raw performance ratio.
///
/// The ratio `(completed_work / hours) + (hours / salary)` is multiplied by
/// this factor before truncation to an integer rating.
pub const RATING_SCALE: Decimal = Decimal::ONE_HUNDRED;

/// Derives the integer performance rating from its three inputs.
///
/// The rating is `(completed_work / weekly_work_hours) +
/// (weekly_work_hours / salary)`, scaled by [`RATING_SCALE`] and truncated
/// toward zero.
///
/// # Arguments
///
/// * `completed_work` - Accumulated work units (may be negative)
/// * `weekly_work_hours` - Weekly hours worked, must be non-zero
/// * `salary` - Salary, must be non-zero
///
/// # Returns
///
/// Returns the integer rating, or an error if:
/// - `weekly_work_hours` or `salary` is zero (`DivisionByZero`)
/// - the scaled ratio does not fit in an `i64` (`CalculationError`)
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::performance_rating;
/// use rust_decimal::Decimal;
///
/// // (10 / 40 + 40 / 20000) * 100 = 25.2, truncated to 25
/// let rating = performance_rating(
///     Decimal::from(10),
///     Decimal::from(40),
///     Decimal::from(20000),
/// )
/// .unwrap();
/// assert_eq!(rating, 25);
/// ```
pub fn performance_rating(
    completed_work: Decimal,
    weekly_work_hours: Decimal,
    salary: Decimal,
) -> RosterResult<i64> {
    if weekly_work_hours.is_zero() {
        return Err(RosterError::DivisionByZero {
            field: "weekly_work_hours".to_string(),
        });
    }
    if salary.is_zero() {
        return Err(RosterError::DivisionByZero {
            field: "salary".to_string(),
        });
    }

    let ratio = completed_work / weekly_work_hours + weekly_work_hours / salary;
    let scaled = (ratio * RATING_SCALE).trunc();

    scaled.to_i64().ok_or_else(|| RosterError::CalculationError {
        message: format!("rating {} exceeds the integer range", scaled),
    })
}
