//! Ranking comparators for roster listings.
//!
//! Employees have two orderings: the natural one on the performance rating
//! alone, and the efficiency one on rating plus extra performance points.
//! Both are expressed as free comparator functions rather than an `Ord`
//! implementation, since an ordering keyed on one field of a mutable record
//! would disagree with equality.

use std::cmp::Ordering;

use crate::models::Employee;

/// Compares two employees descending by combined efficiency score
/// (performance rating plus extra performance points).
///
/// Intended for use with a stable sort so that employees with equal scores
/// keep their existing relative order.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::by_efficiency_desc;
/// use roster_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let a = Employee::new(1, "Alice", Decimal::from(40), Decimal::from(20000), Decimal::from(10))
///     .unwrap();
/// let b = Employee::new(2, "Bob", Decimal::from(40), Decimal::from(20000), Decimal::from(50))
///     .unwrap();
///
/// let mut employees = vec![a, b];
/// employees.sort_by(by_efficiency_desc);
/// assert_eq!(employees[0].id(), 2);
/// ```
pub fn by_efficiency_desc(a: &Employee, b: &Employee) -> Ordering {
    b.efficiency_score().cmp(&a.efficiency_score())
}

/// Compares two employees descending by performance rating alone,
/// excluding extra performance points.
pub fn by_rating_desc(a: &Employee, b: &Employee) -> Ordering {
    b.performance_rating().cmp(&a.performance_rating())
}
