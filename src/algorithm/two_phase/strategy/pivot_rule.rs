//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a profitable column together with its relative cost, or `None` if no column is
    /// profitable and the current basis is optimal.
    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<K>) -> Option<(usize, f64)>;
}

/// Which `PivotRule` to use, for configuration purposes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PivotRuleKind {
    /// See `FirstProfitable`.
    #[default]
    FirstProfitable,
    /// See `SteepestDescentAlongVariable`.
    SteepestDescentAlongVariable,
}

/// Simply pivot on the first column, which has a profitable relative cost.
///
/// Together with the row selection, this is Bland's rule: it can't cycle.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<K>) -> Option<(usize, f64)> {
        (0..tableau.nr_columns())
            .find(|&j| tableau.is_profitable(j))
            .map(|j| (j, tableau.relative_cost(j)))
    }
}

/// Pivot on the column with the largest absolute profitable relative cost.
///
/// Ties are broken in favor of the smallest column index. This rule usually needs fewer pivots,
/// but may cycle on degenerate problems; the iteration limit protects against that.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<K>) -> Option<(usize, f64)> {
        let mut largest: Option<(usize, f64)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .filter(|&j| tableau.is_profitable(j))
            .map(|j| (j, tableau.relative_cost(j))) {
            match largest {
                Some((_, existing_cost)) if cost.abs() <= existing_cost.abs() => {},
                _ => largest = Some((j, cost)),
            }
        }

        largest
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
    use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::BoundDirection;
    use crate::data::number_types::float::Tolerance;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn find_profitable_column() {
        let model = problem_1::model();
        let data = MatrixData::new(&model);
        let mut tableau = Tableau::new_with_slack_basis(&data, NonArtificial::new(data.cost_vector()), Tolerance::default());

        assert_eq!(FirstProfitable::new().select_primal_pivot_column(&tableau), Some((0, -3f64)));
        assert_eq!(SteepestDescentAlongVariable::new().select_primal_pivot_column(&tableau), Some((0, -3f64)));

        tableau.bring_into_basis(0, 1, 2f64, BoundDirection::Lower);
        tableau.bring_into_basis(1, 0, 3f64, BoundDirection::Lower);
        assert_eq!(FirstProfitable::new().select_primal_pivot_column(&tableau), None);
        assert_eq!(SteepestDescentAlongVariable::new().select_primal_pivot_column(&tableau), None);
    }

    #[test]
    fn artificial_columns_never_enter() {
        let model = problem_2::model();
        let data = MatrixData::new(&model);
        let tableau = Tableau::<Artificial>::new(&data, Tolerance::default());

        // x and y both have relative cost -1, the smallest index wins in both rules
        assert_eq!(FirstProfitable::new().select_primal_pivot_column(&tableau), Some((0, -1f64)));
        assert_eq!(SteepestDescentAlongVariable::new().select_primal_pivot_column(&tableau), Some((0, -1f64)));
    }
}
