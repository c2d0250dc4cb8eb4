//! # Building blocks to describe linear programs.
use std::ops::Not;

use enum_map::Enum;

/// Direction of a bound.
///
/// Every variable has a lower and an upper bound. Nonbasic variables are pinned at one of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b (currently, b is always zero).
    Lower,
    /// In the case of a variable, x <= b, where b may be infinite.
    Upper,
}

impl BoundDirection {
    /// Sign of the movement of a nonbasic variable that leaves this bound.
    ///
    /// A variable at its lower bound can only increase, a variable at its upper bound can only
    /// decrease.
    #[must_use]
    pub fn direction_away(self) -> f64 {
        match self {
            BoundDirection::Lower => 1f64,
            BoundDirection::Upper => -1f64,
        }
    }
}

impl Not for BoundDirection {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// Where a variable currently is with respect to the basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VariableStatus {
    /// Basic in the contained row; its value is read from the tableau.
    Basic(usize),
    /// Nonbasic, pinned at its lower bound.
    NonbasicLower,
    /// Nonbasic, pinned at its upper bound.
    NonbasicUpper,
}

impl VariableStatus {
    /// The bound a nonbasic variable is pinned at.
    ///
    /// # Return value
    ///
    /// `None` if the variable is basic.
    pub fn bound(self) -> Option<BoundDirection> {
        match self {
            VariableStatus::Basic(_) => None,
            VariableStatus::NonbasicLower => Some(BoundDirection::Lower),
            VariableStatus::NonbasicUpper => Some(BoundDirection::Upper),
        }
    }

    /// Status of a variable that is pinned at the given bound.
    pub fn at(bound: BoundDirection) -> Self {
        match bound {
            BoundDirection::Lower => VariableStatus::NonbasicLower,
            BoundDirection::Upper => VariableStatus::NonbasicUpper,
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that brings a cost coefficient into canonical, minimizing, form.
    #[must_use]
    pub fn canonical_sign(self) -> f64 {
        match self {
            Objective::Maximize => -1f64,
            Objective::Minimize => 1f64,
        }
    }
}
