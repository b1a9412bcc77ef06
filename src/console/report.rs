//! Human-readable report formatting for console output.

use std::io::{self, Write};

use crate::calculation::PerformanceTrend;
use crate::models::Employee;

/// Formats an employee as a single report line.
///
/// # Example
///
/// ```
/// use roster_engine::console::report::format_employee;
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
/// assert_eq!(
///     format_employee(&employee),
///     "ID: 1, Name: Alice, Performance Rating: 25, Extra Performance Points: 0, \
///      Weekly Work Hours: 40, Salary: 20000, Completed Work: 10"
/// );
/// ```
pub fn format_employee(employee: &Employee) -> String {
    format!(
        "ID: {}, Name: {}, Performance Rating: {}, Extra Performance Points: {}, \
         Weekly Work Hours: {}, Salary: {}, Completed Work: {}",
        employee.id(),
        employee.name(),
        employee.performance_rating(),
        employee.extra_performance_points(),
        employee.weekly_work_hours().normalize(),
        employee.salary().normalize(),
        employee.completed_work().normalize(),
    )
}

/// Writes one report line per employee and returns how many were written.
pub fn write_listing<'a, W, I>(writer: &mut W, employees: I) -> io::Result<usize>
where
    W: Write,
    I: Iterator<Item = &'a Employee>,
{
    let mut count = 0;
    for employee in employees {
        writeln!(writer, "{}", format_employee(employee))?;
        count += 1;
    }
    Ok(count)
}

/// Returns the console message for a comparison trend.
pub fn trend_message(trend: PerformanceTrend) -> &'static str {
    match trend {
        PerformanceTrend::Improvement => "Improvement detected!",
        PerformanceTrend::Decline => "Decline detected!",
        PerformanceTrend::NoChange => "No change.",
    }
}
