use std::thread;

use approx::assert_abs_diff_eq;

use bounded_simplex::{Model, ModelError, Objective, PivotRuleKind, Solution, solve, SolverConfig};

use super::{assert_feasible_and_consistent, feasible_models};

#[test]
fn constraint_binds_before_bound() {
    let solution = solve(&[1f64], Objective::Maximize, &[(vec![1f64], 5f64)], &[10f64]).unwrap();
    assert_eq!(solution, Solution::Optimal { values: vec![5f64], objective_value: 5f64 });
}

#[test]
fn bound_binds_before_constraint() {
    let solution = solve(&[1f64], Objective::Maximize, &[(vec![1f64], 5f64)], &[3f64]).unwrap();
    assert_eq!(solution, Solution::Optimal { values: vec![3f64], objective_value: 3f64 });
}

#[test]
fn infeasible() {
    let solution = solve(&[1f64], Objective::Maximize, &[(vec![1f64], -1f64)], &[f64::INFINITY]).unwrap();
    assert_eq!(solution, Solution::Infeasible);
    assert_eq!(solution.to_string(), "Problem is not feasible.");
}

#[test]
fn unbounded() {
    let solution = solve(&[1f64], Objective::Maximize, &[], &[f64::INFINITY]).unwrap();
    assert_eq!(solution, Solution::Unbounded);
    assert_eq!(solution.to_string(), "Problem is unbounded.");
}

#[test]
fn no_constraints_bounded() {
    let solution = solve(&[2f64, -1f64], Objective::Maximize, &[], &[3f64, 7f64]).unwrap();
    assert_eq!(solution, Solution::Optimal { values: vec![3f64, 0f64], objective_value: 6f64 });
}

#[test]
fn no_variables() {
    let solution = solve(&[], Objective::Minimize, &[(vec![], 1f64)], &[]).unwrap();
    assert_eq!(solution, Solution::Optimal { values: vec![], objective_value: 0f64 });

    let solution = solve(&[], Objective::Minimize, &[(vec![], -1f64)], &[]).unwrap();
    assert_eq!(solution, Solution::Infeasible);
}

#[test]
fn malformed_input() {
    assert!(matches!(
        solve(&[1f64, 1f64], Objective::Maximize, &[(vec![1f64], 1f64)], &[1f64, 1f64]),
        Err(ModelError::DimensionMismatch { expected: 2, found: 1, .. }),
    ));
    assert!(matches!(
        solve(&[1f64], Objective::Maximize, &[], &[-1f64]),
        Err(ModelError::InvalidBound { index: 0, .. }),
    ));
    assert!(matches!(
        solve(&[f64::NAN], Objective::Maximize, &[], &[1f64]),
        Err(ModelError::NotFinite { .. }),
    ));
}

#[test]
fn small_coefficient_next_to_large_one() {
    let constraints = [(vec![1e6f64, 0f64], 1f64), (vec![0f64, 1e-4f64], 1f64)];
    let solution = solve(&[0f64, 1f64], Objective::Maximize, &constraints, &[f64::INFINITY; 2]).unwrap();
    let values = solution.values().unwrap();
    assert_abs_diff_eq!(values[1], 1e4f64, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 1e4f64, epsilon = 1e-6);
}

#[test]
fn small_coefficient_next_to_large_one_needing_first_phase() {
    let constraints = [(vec![1e6f64, 0f64], 1f64), (vec![0f64, -1e-4f64], -1f64)];
    let solution = solve(&[0f64, 1f64], Objective::Minimize, &constraints, &[f64::INFINITY; 2]).unwrap();
    let values = solution.values().unwrap();
    assert_abs_diff_eq!(values[1], 1e4f64, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 1e4f64, epsilon = 1e-6);
}

#[test]
fn feasible_and_consistent() {
    for pivot_rule in [PivotRuleKind::FirstProfitable, PivotRuleKind::SteepestDescentAlongVariable] {
        let config = SolverConfig::default().with_pivot_rule(pivot_rule);
        for model in feasible_models() {
            assert_feasible_and_consistent(&model, &model.solve_with(&config));
        }
    }
}

#[test]
fn known_optima() {
    let expected = [9f64, 2.5f64, 13f64];
    for (model, expected) in feasible_models().iter().zip(expected) {
        let solution = model.solve();
        assert_abs_diff_eq!(solution.objective_value().unwrap(), expected, epsilon = 1e-9);
    }
}

#[test]
fn pivot_rules_agree_on_objective_value() {
    let steepest = SolverConfig::default().with_pivot_rule(PivotRuleKind::SteepestDescentAlongVariable);
    for model in feasible_models() {
        let first = model.solve().objective_value().unwrap();
        let second = model.solve_with(&steepest).objective_value().unwrap();
        assert_abs_diff_eq!(first, second, epsilon = 1e-9);
    }
}

#[test]
fn idempotent() {
    for model in feasible_models() {
        let first = model.solve();
        let second = model.solve();
        let (Some(first_values), Some(second_values)) = (first.values(), second.values()) else {
            panic!("Expected optimal solutions");
        };
        assert!(first_values.iter().zip(second_values).all(|(a, b)| a.to_bits() == b.to_bits()));
        assert_eq!(first.objective_value().map(f64::to_bits), second.objective_value().map(f64::to_bits));
    }
}

#[test]
fn increasing_an_upper_bound_never_hurts() {
    let cost = vec![3f64, 2f64, 4f64];
    let constraints = vec![
        (vec![1f64, 1f64, 2f64], 8f64),
        (vec![2f64, 0f64, 1f64], 6f64),
    ];
    let bounds = vec![2f64, 3f64, 1f64];
    let base = Model::new(cost.clone(), Objective::Maximize, constraints.clone(), bounds.clone())
        .unwrap()
        .solve()
        .objective_value()
        .unwrap();

    for j in 0..bounds.len() {
        for increase in [0.5f64, 1f64, 10f64] {
            let mut bounds = bounds.clone();
            bounds[j] += increase;
            let value = Model::new(cost.clone(), Objective::Maximize, constraints.clone(), bounds)
                .unwrap()
                .solve()
                .objective_value()
                .unwrap();
            assert!(value >= base - 1e-9, "Increasing bound {j} by {increase} decreased {base} to {value}");
        }
    }
}

#[test]
fn concurrent_solves_of_one_model() {
    let models = feasible_models();
    let model = &models[2];
    let expected = model.solve();

    thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(move || model.solve()))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
