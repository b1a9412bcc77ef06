//! The roster: an ordered in-memory collection of employee records.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{self, ComparisonReport, by_efficiency_desc};
use crate::config::RosterPolicy;
use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

/// An ordered collection of employees with exclusive ownership of its
/// records.
///
/// Insertion order is preserved until [`sort_by_efficiency`] reorders the
/// sequence in place. Ids are assigned sequentially starting at 1 and are
/// never reused, even after removal; the counter resets only when the roster
/// itself is reconstructed.
///
/// [`sort_by_efficiency`]: Roster::sort_by_efficiency
///
/// # Example
///
/// ```
/// use roster_engine::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// let id = roster
///     .add("Alice", Decimal::from(40), Decimal::from(20000), Decimal::from(10))
///     .unwrap();
/// assert_eq!(id, 1);
/// assert_eq!(roster.get(id).unwrap().performance_rating(), 25);
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    next_id: u32,
    policy: RosterPolicy,
}

impl Roster {
    /// Creates an empty roster with the default admission policy.
    pub fn new() -> Self {
        Self::with_policy(RosterPolicy::default())
    }

    /// Creates an empty roster with the given admission policy.
    pub fn with_policy(policy: RosterPolicy) -> Self {
        Self {
            employees: Vec::new(),
            next_id: 1,
            policy,
        }
    }

    /// Returns the admission policy.
    pub fn policy(&self) -> &RosterPolicy {
        &self.policy
    }

    /// Returns the number of employees on the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Admits a new employee and returns the assigned id.
    ///
    /// Hours and salary are clamped against the policy before construction.
    /// The id counter advances only on successful admission, so a rejected
    /// candidate (hours clamped to zero, see the crate's division-by-zero
    /// policy) burns no id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        weekly_work_hours: Decimal,
        salary: Decimal,
        completed_work: Decimal,
    ) -> RosterResult<u32> {
        let hours = self.policy.clamp_hours(weekly_work_hours);
        let salary = self.policy.clamp_salary(salary);

        let employee = Employee::new(self.next_id, name, hours, salary, completed_work)?;
        let id = employee.id();

        self.employees.push(employee);
        self.next_id += 1;
        debug!(id, "employee admitted");
        Ok(id)
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: u32) -> RosterResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id() == id)
            .ok_or(RosterError::EmployeeNotFound { id })
    }

    fn get_mut(&mut self, id: u32) -> RosterResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RosterError::EmployeeNotFound { id })
    }

    /// Removes the employee with the given id and returns the record.
    ///
    /// Remaining ids are not renumbered and the id counter does not rewind.
    pub fn remove(&mut self, id: u32) -> RosterResult<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id() == id)
            .ok_or(RosterError::EmployeeNotFound { id })?;

        debug!(id, "employee removed");
        Ok(self.employees.remove(index))
    }

    /// Adds completed work units to an employee and recomputes their rating.
    pub fn add_completed_work(&mut self, id: u32, amount: Decimal) -> RosterResult<&Employee> {
        let employee = self.get_mut(id)?;
        employee.add_completed_work(amount)?;
        Ok(employee)
    }

    /// Adds extra performance points to an employee.
    ///
    /// This adds to the extra-point counter; it never sets an absolute
    /// value, and the employee's performance rating is unchanged by it.
    pub fn add_performance_points(&mut self, id: u32, points: i64) -> RosterResult<&Employee> {
        let employee = self.get_mut(id)?;
        employee.add_extra_performance_points(points);
        Ok(employee)
    }

    /// Updates an employee's work hours and salary, clamping both against
    /// the policy, and recomputes their rating.
    ///
    /// An update whose clamped hours are zero is rejected and leaves the
    /// record unchanged.
    pub fn update_work_and_salary(
        &mut self,
        id: u32,
        weekly_work_hours: Decimal,
        salary: Decimal,
    ) -> RosterResult<&Employee> {
        let hours = self.policy.clamp_hours(weekly_work_hours);
        let salary = self.policy.clamp_salary(salary);

        let employee = self.get_mut(id)?;
        employee.set_work_and_salary(hours, salary)?;
        Ok(employee)
    }

    /// Compares an employee's current combined score against a prior
    /// baseline; produces no state change.
    pub fn compare_against_baseline(
        &self,
        id: u32,
        prior_hours: Decimal,
        prior_salary: Decimal,
    ) -> RosterResult<ComparisonReport> {
        let employee = self.get(id)?;
        calculation::compare_against_baseline(employee, prior_hours, prior_salary)
    }

    /// Iterates over all employees in current sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Iterates over employees whose name contains the given term.
    ///
    /// Matching is case-sensitive; the empty term matches every employee.
    /// No matches is an empty iteration, not an error.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees.iter().filter(move |e| e.name().contains(term))
    }

    /// Sorts the roster in place, descending by combined efficiency score.
    ///
    /// The sort is stable: employees with equal scores keep their relative
    /// order. The new order persists for every subsequent operation that
    /// iterates the roster.
    pub fn sort_by_efficiency(&mut self) {
        self.employees.sort_by(by_efficiency_desc);
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
