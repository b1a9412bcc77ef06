//! Employee record model.
//!
//! This module defines the [`Employee`] struct, a mutable record whose
//! integer performance rating is derived from its completed work, weekly
//! work hours, and salary.

use rust_decimal::Decimal;

use crate::calculation::performance_rating;
use crate::error::RosterResult;

/// A single employee record.
///
/// Fields are private so that the derived `performance_rating` can never be
/// observed stale: every mutation goes through a method that computes the
/// candidate rating first and assigns fields only on success, leaving the
/// record unchanged when the mutation is rejected.
///
/// # Example
///
/// ```
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
/// assert_eq!(employee.performance_rating(), 25);
/// assert_eq!(employee.extra_performance_points(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: u32,
    name: String,
    weekly_work_hours: Decimal,
    salary: Decimal,
    completed_work: Decimal,
    extra_performance_points: i64,
    performance_rating: i64,
}

impl Employee {
    /// Creates a new employee with the rating computed immediately and no
    /// extra performance points.
    ///
    /// The model performs no range clamping; admission clamps are the
    /// caller's responsibility. A zero `weekly_work_hours` or `salary` is
    /// rejected with `DivisionByZero`.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        weekly_work_hours: Decimal,
        salary: Decimal,
        completed_work: Decimal,
    ) -> RosterResult<Self> {
        let rating = performance_rating(completed_work, weekly_work_hours, salary)?;

        Ok(Self {
            id,
            name: name.into(),
            weekly_work_hours,
            salary,
            completed_work,
            extra_performance_points: 0,
            performance_rating: rating,
        })
    }

    /// Returns the unique id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the weekly work hours.
    pub fn weekly_work_hours(&self) -> Decimal {
        self.weekly_work_hours
    }

    /// Returns the salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Returns the accumulated completed work units.
    pub fn completed_work(&self) -> Decimal {
        self.completed_work
    }

    /// Returns the accumulated extra performance points.
    pub fn extra_performance_points(&self) -> i64 {
        self.extra_performance_points
    }

    /// Returns the derived performance rating.
    ///
    /// Extra performance points are excluded; see [`efficiency_score`]
    /// for the combined score.
    ///
    /// [`efficiency_score`]: Employee::efficiency_score
    pub fn performance_rating(&self) -> i64 {
        self.performance_rating
    }

    /// Returns the combined ranking score: performance rating plus extra
    /// performance points.
    ///
    /// The two fields stay independent and are summed only at read time.
    pub fn efficiency_score(&self) -> i64 {
        self.performance_rating + self.extra_performance_points
    }

    /// Adds completed work units and recomputes the rating.
    ///
    /// Negative amounts are accepted and decrease the accumulated total.
    pub fn add_completed_work(&mut self, amount: Decimal) -> RosterResult<()> {
        let total = self.completed_work + amount;
        let rating = performance_rating(total, self.weekly_work_hours, self.salary)?;

        self.completed_work = total;
        self.performance_rating = rating;
        Ok(())
    }

    /// Adds extra performance points.
    ///
    /// Extra points do not feed the rating formula, so the stored rating is
    /// unchanged; only the separately tracked counter grows.
    pub fn add_extra_performance_points(&mut self, points: i64) {
        self.extra_performance_points += points;
    }

    /// Assigns new work hours and salary and recomputes the rating.
    ///
    /// The caller clamps the values beforehand. Hours that would leave the
    /// rating undefined (zero) are rejected with `DivisionByZero` and the
    /// record keeps its previous values.
    pub fn set_work_and_salary(&mut self, hours: Decimal, salary: Decimal) -> RosterResult<()> {
        let rating = performance_rating(self.completed_work, hours, salary)?;

        self.weekly_work_hours = hours;
        self.salary = salary;
        self.performance_rating = rating;
        Ok(())
    }
}
