use approx::assert_abs_diff_eq;

use bounded_simplex::{PivotRuleKind, Solution, SolverConfig};
use bounded_simplex::case_study::{CaseStudy, OvertimeAllocation, ProductionPlanning};

fn configs() -> [SolverConfig; 2] {
    [
        SolverConfig::default(),
        SolverConfig::default().with_pivot_rule(PivotRuleKind::SteepestDescentAlongVariable),
    ]
}

fn assert_values(solution: &Solution, expected: &[f64]) {
    let values = solution.values().unwrap();
    assert_eq!(values.len(), expected.len());
    for (value, expected) in values.iter().zip(expected) {
        assert_abs_diff_eq!(value, expected, epsilon = 1e-6);
    }
}

#[test]
fn production_planning() {
    for config in configs() {
        let report = ProductionPlanning::default().solve_with(&config).unwrap();

        assert_values(&report.solution, &[3000f64, 0f64, 5000f64, 2000f64]);
        assert_abs_diff_eq!(report.solution.objective_value().unwrap(), 1_100_000f64, epsilon = 1e-4);
        assert_eq!(report.variable_names, ["x11", "x12", "x21", "x22"]);
        assert_eq!(report.constraint_usage.len(), 2);
        assert_abs_diff_eq!(report.constraint_usage[0].slack, 0f64, epsilon = 1e-6);
        assert_abs_diff_eq!(report.constraint_usage[1].slack, 2000f64, epsilon = 1e-6);
        assert_abs_diff_eq!(report.contributions.iter().sum::<f64>(), 1_100_000f64, epsilon = 1e-4);
    }
}

#[test]
fn overtime_allocation() {
    for config in configs() {
        let report = OvertimeAllocation::default().solve_with(&config).unwrap();

        assert_values(&report.solution, &[2000f64, 80f64, 1000f64, 500f64]);
        assert_abs_diff_eq!(report.solution.objective_value().unwrap(), 3580f64, epsilon = 1e-6);
        assert_abs_diff_eq!(report.constraint_usage[0].usage, 60_000f64, epsilon = 1e-6);
        assert_abs_diff_eq!(report.constraint_usage[0].utilization.unwrap(), 100f64, epsilon = 1e-6);

        let capacity = report.capacity_usage.iter().map(|usage| usage.unwrap()).collect::<Vec<_>>();
        for (usage, expected) in capacity.iter().zip([100f64, 8f64, 100f64, 100f64]) {
            assert_abs_diff_eq!(*usage, expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn production_without_overtime_capacity() {
    let case = ProductionPlanning { capacity: [3000f64, 0f64, 5000f64, 0f64], ..Default::default() };
    let report = case.solve_with(&SolverConfig::default()).unwrap();

    assert_values(&report.solution, &[3000f64, 0f64, 5000f64, 0f64]);
    assert_eq!(report.capacity_usage[1], Some(0f64));
    assert_abs_diff_eq!(report.solution.objective_value().unwrap(), 950_000f64, epsilon = 1e-4);
}

#[test]
fn overtime_without_budget() {
    let case = OvertimeAllocation { budget: 0f64, ..Default::default() };
    let report = case.solve_with(&SolverConfig::default()).unwrap();

    assert_values(&report.solution, &[0f64; 4]);
    assert_eq!(report.constraint_usage[0].utilization, None);
}

#[test]
fn invalid_case_is_an_error() {
    let case = OvertimeAllocation { budget: f64::NAN, ..Default::default() };
    assert!(case.solve_with(&SolverConfig::default()).is_err());
}

#[test]
fn iteration_limit_is_reported() {
    let config = SolverConfig::default().with_max_iterations(1);
    let report = ProductionPlanning::default().solve_with(&config).unwrap();

    assert_eq!(report.solution, Solution::IterationLimitExceeded);
    assert!(report.constraint_usage.is_empty());
    assert_eq!(report.to_string(), "Iteration limit exceeded.");
}
