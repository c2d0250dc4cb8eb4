use approx::assert_abs_diff_eq;

use bounded_simplex::{Model, Objective, Solution, SolverConfig};

/// Beale's example, which cycles under the textbook largest coefficient rule.
fn beale() -> Model {
    Model::new(
        vec![-0.75f64, 20f64, -0.5f64, 6f64],
        Objective::Minimize,
        vec![
            (vec![0.25f64, -8f64, -1f64, 9f64], 0f64),
            (vec![0.5f64, -12f64, -0.5f64, 3f64], 0f64),
            (vec![0f64, 0f64, 1f64, 0f64], 1f64),
        ],
        vec![f64::INFINITY; 4],
    ).unwrap()
}

#[test]
fn beale_does_not_cycle() {
    let solution = beale().solve();
    assert_abs_diff_eq!(solution.objective_value().unwrap(), -1.25f64, epsilon = 1e-9);
}

#[test]
fn beale_with_bound_instead_of_row() {
    let model = Model::new(
        vec![-0.75f64, 20f64, -0.5f64, 6f64],
        Objective::Minimize,
        vec![
            (vec![0.25f64, -8f64, -1f64, 9f64], 0f64),
            (vec![0.5f64, -12f64, -0.5f64, 3f64], 0f64),
        ],
        vec![f64::INFINITY, f64::INFINITY, 1f64, f64::INFINITY],
    ).unwrap();
    let solution = model.solve();
    assert_abs_diff_eq!(solution.objective_value().unwrap(), -1.25f64, epsilon = 1e-9);
}

#[test]
fn duplicate_constraints() {
    let model = Model::new(
        vec![1f64, 1f64],
        Objective::Maximize,
        vec![
            (vec![1f64, 1f64], 4f64),
            (vec![1f64, 1f64], 4f64),
            (vec![2f64, 2f64], 8f64),
        ],
        vec![3f64, 3f64],
    ).unwrap();
    let solution = model.solve();
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 4f64, epsilon = 1e-9);
}

#[test]
fn equality_written_as_two_inequalities() {
    let model = Model::new(
        vec![1f64, 2f64],
        Objective::Minimize,
        vec![
            (vec![1f64, 1f64], 2f64),
            (vec![-1f64, -1f64], -2f64),
        ],
        vec![f64::INFINITY, f64::INFINITY],
    ).unwrap();
    match model.solve() {
        Solution::Optimal { values, objective_value } => {
            assert_abs_diff_eq!(values[0], 2f64, epsilon = 1e-9);
            assert_abs_diff_eq!(values[1], 0f64, epsilon = 1e-9);
            assert_abs_diff_eq!(objective_value, 2f64, epsilon = 1e-9);
        },
        other => panic!("Expected an optimal solution, got {other:?}"),
    }
}

#[test]
fn fixed_variable_stays_at_zero() {
    let model = Model::new(
        vec![1f64, 10f64],
        Objective::Maximize,
        vec![(vec![1f64, 1f64], 5f64)],
        vec![f64::INFINITY, 0f64],
    ).unwrap();
    assert_eq!(model.solve(), Solution::Optimal { values: vec![5f64, 0f64], objective_value: 5f64 });
}

#[test]
fn vacuous_constraint() {
    let model = Model::new(
        vec![1f64],
        Objective::Maximize,
        vec![(vec![0f64], 0f64), (vec![1f64], 2f64)],
        vec![f64::INFINITY],
    ).unwrap();
    assert_eq!(model.solve().values(), Some(&[2f64][..]));
}

#[test]
fn zero_iterations() {
    let config = SolverConfig::default().with_max_iterations(0);

    // The origin is optimal, no pivot needed
    let model = Model::new(vec![1f64], Objective::Minimize, vec![(vec![1f64], 1f64)], vec![1f64]).unwrap();
    assert_eq!(model.solve_with(&config), Solution::Optimal { values: vec![0f64], objective_value: 0f64 });

    assert_eq!(beale().solve_with(&config), Solution::IterationLimitExceeded);
}
