mod error;
pub mod format;
mod linear_program;
pub mod pivot;
pub mod problem;
pub mod solver;
mod tableau;
mod util;

#[cfg(feature = "text")]
mod parse;

#[cfg(feature = "text")]
pub use parse::parse_problem;

pub use crate::error::RatLpError;
pub use crate::linear_program::LinearProgram;
pub use crate::pivot::{PivotDecision, PivotRule};
pub use crate::problem::{Constraint, ConstraintOp, Direction, Problem, Variable, VariableId};
pub use crate::solver::{
    IterationSnapshot, RatLpResult, SimplexRun, SimplexSolver, Solution, SolverResult, Status,
    Step, Trace,
};
pub use crate::tableau::{Pivot, Tableau};
pub use crate::util::{ratio, rational, Rational};
