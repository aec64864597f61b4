//! Property-style integration tests: determinism, monotonicity and the
//! zero-rate reduction to classic 0/1 knapsack.

use std::collections::BTreeMap;

use testresult::TestResult;

use stowage::{
    config::Problem,
    fixtures::Fixture,
    items::Item,
    solvers::{Solver, dynamic::DynamicWeightSolver},
};

/// Reference 1-D 0/1 knapsack by base weight only, tracking best value per
/// exact cumulative weight. Deliberately structured differently from the
/// solver under test.
fn classic_knapsack(items: &[Item], capacity: u32) -> u64 {
    let mut states: BTreeMap<u32, u64> = BTreeMap::from([(0, 0)]);

    for item in items {
        let snapshot: Vec<(u32, u64)> = states.iter().map(|(&cost, &value)| (cost, value)).collect();

        for (cost, value) in snapshot {
            let Some(next_cost) = cost.checked_add(item.base_weight()) else {
                continue;
            };

            if next_cost > capacity {
                continue;
            }

            let candidate = value + u64::from(item.value());

            states
                .entry(next_cost)
                .and_modify(|best| *best = (*best).max(candidate))
                .or_insert(candidate);
        }
    }

    states.values().copied().max().unwrap_or(0)
}

#[test]
fn zero_rate_reduces_to_classic_knapsack() -> TestResult {
    let items = vec![
        Item::new(60, 5, 0),
        Item::new(50, 4, 0),
        Item::new(70, 6, 0),
        Item::new(30, 3, 0),
        Item::new(45, 2, 0),
    ];

    for capacity in [3, 5, 8, 10, 15, 20] {
        let problem = Problem::new(1, capacity, 0, items.clone())?;
        let result = DynamicWeightSolver::solve(&problem)?;

        assert_eq!(
            result.max_value,
            classic_knapsack(&items, capacity),
            "solver disagrees with the 1-D reference at capacity {capacity}"
        );
    }

    Ok(())
}

#[test]
fn solving_twice_is_deterministic() -> TestResult {
    for fixture in ["uniform", "two-groups", "rush"] {
        let problem = Fixture::from_set(fixture)?.problem()?;

        let first = DynamicWeightSolver::solve(&problem)?;
        let second = DynamicWeightSolver::solve(&problem)?;

        assert_eq!(first.max_value, second.max_value, "max value drifted");
        assert_eq!(
            first.group_results, second.group_results,
            "group results drifted for fixture {fixture}"
        );
    }

    Ok(())
}

#[test]
fn raising_the_capacity_never_lowers_the_maximum() -> TestResult {
    let items = vec![Item::new(10, 2, 0), Item::new(15, 3, 0), Item::new(7, 5, 0)];

    let mut previous = 0;

    for capacity in [5, 7, 10, 16, 25] {
        let problem = Problem::new(1, capacity, 2, items.clone())?;
        let result = DynamicWeightSolver::solve(&problem)?;

        assert!(
            result.max_value >= previous,
            "max value dropped from {previous} to {} at capacity {capacity}",
            result.max_value
        );

        previous = result.max_value;
    }

    Ok(())
}

#[test]
fn overall_maximum_is_the_pointwise_maximum_of_group_results() -> TestResult {
    for fixture in ["uniform", "two-groups", "rush"] {
        let problem = Fixture::from_set(fixture)?.problem()?;
        let result = DynamicWeightSolver::solve(&problem)?;

        let pointwise = result
            .group_results
            .iter()
            .map(|group| group.max_value)
            .max()
            .unwrap_or(0);

        assert_eq!(result.max_value, pointwise, "aggregate mismatch in {fixture}");
    }

    Ok(())
}

#[test]
fn fixture_expectations_hold() -> TestResult {
    let cases = [("uniform", 120), ("two-groups", 25), ("rush", 15)];

    for (name, expected) in cases {
        let problem = Fixture::from_set(name)?.problem()?;
        let result = DynamicWeightSolver::solve(&problem)?;

        assert_eq!(result.max_value, expected, "unexpected optimum for {name}");
    }

    Ok(())
}
