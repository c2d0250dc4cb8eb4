//! # Properties that hold for every solve
//!
//! Small hand-written models, checked for feasibility of the returned point and consistency of the
//! reported objective value.
use bounded_simplex::{Model, Objective, Solution};

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Absolute slack allowed when checking constraints and bounds.
const TOLERANCE: f64 = 1e-7;

/// A handful of feasible and bounded models of varying shape and scale.
fn feasible_models() -> Vec<Model> {
    vec![
        Model::new(
            vec![3f64, 2f64],
            Objective::Maximize,
            vec![(vec![1f64, 1f64], 4f64), (vec![3f64, 1f64], 6f64)],
            vec![10f64, 10f64],
        ).unwrap(),
        Model::new(
            vec![2f64, 1f64],
            Objective::Minimize,
            vec![(vec![-1f64, -1f64], -2f64), (vec![-1f64, 1f64], 1f64)],
            vec![10f64, 10f64],
        ).unwrap(),
        Model::new(
            vec![5f64, 4f64, 3f64],
            Objective::Maximize,
            vec![
                (vec![2f64, 3f64, 1f64], 5f64),
                (vec![4f64, 1f64, 2f64], 11f64),
                (vec![3f64, 4f64, 2f64], 8f64),
            ],
            vec![f64::INFINITY; 3],
        ).unwrap(),
        Model::new(
            vec![1f64, -1f64, 2f64, 0.5f64],
            Objective::Minimize,
            vec![
                (vec![-1f64, -2f64, 0f64, -1f64], -3f64),
                (vec![1f64, 0f64, -1f64, 1f64], 2f64),
                (vec![0f64, 1f64, 1f64, 1f64], 6f64),
            ],
            vec![4f64, 2.5f64, 3f64, f64::INFINITY],
        ).unwrap(),
        Model::new(
            vec![1f64, 1f64, 1f64],
            Objective::Maximize,
            vec![(vec![1f64, 2f64, 3f64], 12f64), (vec![-1f64, 0f64, 1f64], -1f64)],
            vec![2f64, 2f64, 2f64],
        ).unwrap(),
        // Rows of very different magnitude, origin feasible
        Model::new(
            vec![1f64, 1f64],
            Objective::Maximize,
            vec![(vec![1e6f64, 0f64], 1f64), (vec![0f64, 1e-4f64], 1f64)],
            vec![f64::INFINITY, f64::INFINITY],
        ).unwrap(),
        // Rows of very different magnitude, origin infeasible
        Model::new(
            vec![1f64, 1f64],
            Objective::Minimize,
            vec![(vec![1e6f64, 0f64], 1f64), (vec![0f64, -1e-4f64], -1f64)],
            vec![f64::INFINITY, f64::INFINITY],
        ).unwrap(),
        // Small and large costs, coefficients and bounds together
        Model::new(
            vec![1e-3f64, 1e3f64],
            Objective::Minimize,
            vec![(vec![-1e5f64, -1e-2f64], -1e3f64), (vec![1f64, 1e-3f64], 5f64)],
            vec![1f64, 1e4f64],
        ).unwrap(),
    ]
}

/// Assert that an optimal solution satisfies all constraints and bounds, and that its objective
/// value is the dot product of the cost and the values.
fn assert_feasible_and_consistent(model: &Model, solution: &Solution) {
    let Solution::Optimal { values, objective_value } = solution else {
        panic!("Expected an optimal solution, got {solution:?}");
    };
    assert_eq!(values.len(), model.nr_variables());

    for (i, constraint) in model.constraints().iter().enumerate() {
        let activity = constraint.activity(values);
        assert!(activity <= constraint.rhs() + TOLERANCE, "Row {i} violated: {activity} > {}", constraint.rhs());
    }
    for (j, (variable, value)) in model.variables().iter().zip(values).enumerate() {
        assert!(*value >= variable.lower_bound() - TOLERANCE, "Variable {j} below its bound: {value}");
        assert!(*value <= variable.upper_bound() + TOLERANCE, "Variable {j} above its bound: {value}");
    }

    let expected = model.cost().iter().zip(values).map(|(c, x)| c * x).sum::<f64>();
    approx::assert_abs_diff_eq!(*objective_value, expected, epsilon = TOLERANCE);
}
