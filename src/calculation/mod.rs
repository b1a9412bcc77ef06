//! Calculation logic for the roster engine.
//!
//! This module contains the pure functions behind the roster: the
//! performance rating formula, the ranking comparators used for listings,
//! and the baseline comparison that classifies an employee's change in
//! performance.

mod comparison;
mod efficiency;
mod rating;

pub use comparison::{ComparisonReport, PerformanceTrend, compare_against_baseline};
pub use efficiency::{by_efficiency_desc, by_rating_desc};
pub use rating::{RATING_SCALE, performance_rating};
