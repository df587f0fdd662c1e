use crate::problem::ConstraintOp;
use crate::util::Rational;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatLpError {
    #[error("constraint {row} uses {op}, only \u{2264} constraints are supported")]
    UnsupportedConstraint { row: usize, op: ConstraintOp },

    #[error("constraint {row} has negative right-hand side {rhs}, the slack basis is infeasible")]
    NegativeRhs { row: usize, rhs: Rational },

    #[error("problem is unbounded, column {column} has no eligible leaving row")]
    Unbounded { column: usize },

    #[error("no optimum reached within {steps} pivots")]
    MaxIter { steps: u64 },

    #[error("pivot element at ({row}, {column}) is zero")]
    ZeroPivot { row: usize, column: usize },

    #[error("{0}")]
    InvalidProblem(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl RatLpError {
    pub fn invalid(msg: String) -> Self {
        Self::InvalidProblem(msg)
    }
}
