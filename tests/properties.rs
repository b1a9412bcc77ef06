//! Property tests for rating arithmetic and roster invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use roster_engine::calculation::{RATING_SCALE, performance_rating};
use roster_engine::models::Employee;
use roster_engine::roster::Roster;

/// Admissible hours as hundredths in (0, 80].
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=8000).prop_map(|h| Decimal::new(h, 2))
}

/// Admissible salaries as hundredths in [17000, 1000000].
fn salary_strategy() -> impl Strategy<Value = Decimal> {
    (1_700_000i64..=100_000_000).prop_map(|s| Decimal::new(s, 2))
}

/// Completed work as hundredths in [0, 100000].
fn work_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|w| Decimal::new(w, 2))
}

proptest! {
    #[test]
    fn prop_rating_matches_truncated_scaled_ratio(
        work in work_strategy(),
        hours in hours_strategy(),
        salary in salary_strategy(),
    ) {
        let rating = performance_rating(work, hours, salary).unwrap();
        let expected = ((work / hours + hours / salary) * RATING_SCALE).trunc();

        prop_assert_eq!(Decimal::from(rating), expected);
    }

    #[test]
    fn prop_valid_inputs_never_error(
        work in work_strategy(),
        hours in hours_strategy(),
        salary in salary_strategy(),
    ) {
        prop_assert!(performance_rating(work, hours, salary).is_ok());
    }

    #[test]
    fn prop_extra_points_leave_rating_unchanged_and_compose(
        work in work_strategy(),
        hours in hours_strategy(),
        salary in salary_strategy(),
        p1 in -1000i64..1000,
        p2 in -1000i64..1000,
    ) {
        let mut split = Employee::new(1, "emp", hours, salary, work).unwrap();
        let mut single = split.clone();
        let rating_before = split.performance_rating();

        split.add_extra_performance_points(p1);
        split.add_extra_performance_points(p2);
        single.add_extra_performance_points(p1 + p2);

        prop_assert_eq!(split.performance_rating(), rating_before);
        prop_assert_eq!(split.extra_performance_points(), p1 + p2);
        prop_assert_eq!(split, single);
    }

    #[test]
    fn prop_completed_work_leaves_extra_points_unchanged(
        work in work_strategy(),
        amount in work_strategy(),
        hours in hours_strategy(),
        salary in salary_strategy(),
        points in -1000i64..1000,
    ) {
        let mut employee = Employee::new(1, "emp", hours, salary, work).unwrap();
        employee.add_extra_performance_points(points);

        employee.add_completed_work(amount).unwrap();

        let expected = performance_rating(work + amount, hours, salary).unwrap();
        prop_assert_eq!(employee.extra_performance_points(), points);
        prop_assert_eq!(employee.performance_rating(), expected);
    }

    #[test]
    fn prop_efficiency_listing_is_non_increasing_and_stable(
        works in prop::collection::vec(work_strategy(), 1..20),
        extras in prop::collection::vec(-50i64..50, 1..20),
    ) {
        let mut roster = Roster::new();
        for work in &works {
            let id = roster
                .add("emp", Decimal::from(40), Decimal::from(20000), *work)
                .unwrap();
            if let Some(extra) = extras.get((id - 1) as usize) {
                roster.add_performance_points(id, *extra).unwrap();
            }
        }

        roster.sort_by_efficiency();

        let listed: Vec<(i64, u32)> = roster
            .iter()
            .map(|e| (e.efficiency_score(), e.id()))
            .collect();
        for pair in listed.windows(2) {
            prop_assert!(pair[0].0 >= pair[1].0, "scores must be non-increasing");
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1, "ties keep insertion order");
            }
        }
    }

    #[test]
    fn prop_ids_are_never_reused(
        removals in prop::collection::vec(1u32..10, 0..6),
    ) {
        let mut roster = Roster::new();
        for _ in 0..9 {
            roster
                .add("emp", Decimal::from(40), Decimal::from(20000), Decimal::from(10))
                .unwrap();
        }

        for id in removals {
            let _ = roster.remove(id);
        }

        let next = roster
            .add("late", Decimal::from(40), Decimal::from(20000), Decimal::from(10))
            .unwrap();
        prop_assert_eq!(next, 10);
    }

    #[test]
    fn prop_search_empty_pattern_matches_everything(
        count in 1usize..15,
    ) {
        let mut roster = Roster::new();
        for i in 0..count {
            roster
                .add(
                    format!("emp_{i}"),
                    Decimal::from(40),
                    Decimal::from(20000),
                    Decimal::from(10),
                )
                .unwrap();
        }

        prop_assert_eq!(roster.search("").count(), count);
        prop_assert_eq!(roster.search("no such name").count(), 0);
    }
}
