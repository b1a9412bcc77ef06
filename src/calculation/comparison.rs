//! Baseline comparison of an employee's current performance.
//!
//! The comparison pits the employee's current combined score against a
//! reference ratio computed from prior work hours and salary supplied by the
//! operator, and classifies the change as an improvement, a decline, or no
//! change.

use rust_decimal::Decimal;

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

use super::rating::RATING_SCALE;

/// The direction of change detected by a baseline comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTrend {
    /// The current ratio is above the baseline.
    Improvement,
    /// The current ratio is below the baseline.
    Decline,
    /// The two ratios are equal.
    NoChange,
}

/// The result of comparing an employee against a prior baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// The id of the compared employee.
    pub employee_id: u32,
    /// The employee's current combined score divided by the rating scale.
    pub current_ratio: Decimal,
    /// The reference ratio derived from the prior hours and salary.
    pub baseline_ratio: Decimal,
    /// The classification of the change.
    pub trend: PerformanceTrend,
}

/// Compares an employee's current combined score against a prior baseline.
///
/// The current ratio is `(performance_rating + extra_performance_points)`
/// divided by the rating scale. The baseline ratio is
/// `(prior_hours / prior_salary) + (prior_salary / prior_hours)`; this
/// reference formula intentionally pairs its operands differently from the
/// rating formula and is kept as is.
///
/// # Arguments
///
/// * `employee` - The employee to compare
/// * `prior_hours` - The prior weekly work hours, must be non-zero
/// * `prior_salary` - The prior salary, must be non-zero
///
/// # Returns
///
/// Returns a [`ComparisonReport`], or `DivisionByZero` if either prior value
/// is zero.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::{compare_against_baseline, PerformanceTrend};
/// use roster_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     1,
///     "Alice",
///     Decimal::from(40),
///     Decimal::from(20000),
///     Decimal::from(10),
/// )
/// .unwrap();
///
/// let report =
///     compare_against_baseline(&employee, Decimal::from(40), Decimal::from(20000)).unwrap();
/// // 0.25 is far below 40/20000 + 20000/40 = 500.002
/// assert_eq!(report.trend, PerformanceTrend::Decline);
/// ```
pub fn compare_against_baseline(
    employee: &Employee,
    prior_hours: Decimal,
    prior_salary: Decimal,
) -> RosterResult<ComparisonReport> {
    if prior_hours.is_zero() {
        return Err(RosterError::DivisionByZero {
            field: "prior_hours".to_string(),
        });
    }
    if prior_salary.is_zero() {
        return Err(RosterError::DivisionByZero {
            field: "prior_salary".to_string(),
        });
    }

    let current_ratio = Decimal::from(employee.efficiency_score()) / RATING_SCALE;
    let baseline_ratio = prior_hours / prior_salary + prior_salary / prior_hours;

    let trend = match current_ratio.cmp(&baseline_ratio) {
        std::cmp::Ordering::Greater => PerformanceTrend::Improvement,
        std::cmp::Ordering::Less => PerformanceTrend::Decline,
        std::cmp::Ordering::Equal => PerformanceTrend::NoChange,
    };

    Ok(ComparisonReport {
        employee_id: employee.id(),
        current_ratio,
        baseline_ratio,
        trend,
    })
}
