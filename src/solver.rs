use crate::error::RatLpError;
use crate::linear_program::LinearProgram;
use crate::pivot::{PivotDecision, PivotRule};
use crate::problem::Direction;
use crate::tableau::{Pivot, Tableau};
use crate::util::{Rational, ITER_WIDTH};

use log::{debug, info, trace};

pub type RatLpResult = Result<SolverResult, RatLpError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult {
    Optimal(Solution),
    Unbounded { column: usize },
    MaxIter { steps: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Optimal,
    Unbounded,
    MaxIter,
}

impl SolverResult {
    pub fn status(&self) -> Status {
        match self {
            SolverResult::Optimal(..) => Status::Optimal,
            SolverResult::Unbounded { .. } => Status::Unbounded,
            SolverResult::MaxIter { .. } => Status::MaxIter,
        }
    }

    /// The optimal solution, or the reason there is none.
    pub fn into_solution(self) -> Result<Solution, RatLpError> {
        match self {
            SolverResult::Optimal(solution) => Ok(solution),
            SolverResult::Unbounded { column } => Err(RatLpError::Unbounded { column }),
            SolverResult::MaxIter { steps } => Err(RatLpError::MaxIter { steps }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    x: Vec<Rational>,
    n: usize,
    obj: Rational,
    direction: Direction,
    steps: u64,
}

impl Solution {
    fn new(lp: &LinearProgram, tableau: &Tableau, steps: u64) -> Self {
        let n = tableau.num_decision_vars();
        let x = tableau.extract_solution();
        let obj = lp.obj(&x[..n]);

        Self {
            x,
            n,
            obj,
            direction: lp.direction,
            steps,
        }
    }

    /// All `n + m` values, decision variables first, then slacks.
    #[inline]
    pub fn x(&self) -> &[Rational] {
        &self.x
    }

    #[inline]
    pub fn decision_values(&self) -> &[Rational] {
        &self.x[..self.n]
    }

    #[inline]
    pub fn slack_values(&self) -> &[Rational] {
        &self.x[self.n..]
    }

    /// Objective computed with the maximization-oriented coefficients, so a
    /// minimization reports the negated optimum.
    #[inline]
    pub fn obj(&self) -> &Rational {
        &self.obj
    }

    /// Objective in the direction the problem was originally stated in.
    pub fn original_obj(&self) -> Rational {
        match self.direction {
            Direction::Maximize => self.obj.clone(),
            Direction::Minimize => -self.obj.clone(),
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of pivots performed.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

/// Copy of the tableau before the first pivot (step 0) and after each pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSnapshot {
    pub step: u64,
    pub pivot: Option<Pivot>,
    pub tableau: Tableau,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Pivoted(Pivot),
    Optimal,
    Unbounded { column: usize },
}

/// One solve, advanced a pivot at a time.
#[derive(Debug, Clone)]
pub struct SimplexRun {
    tableau: Tableau,
    rule: PivotRule,
    steps: u64,
    last_pivot: Option<Pivot>,
}

impl SimplexRun {
    pub fn new(lp: &LinearProgram, rule: PivotRule) -> Result<Self, RatLpError> {
        let tableau = Tableau::build(lp)?;

        Ok(Self {
            tableau,
            rule,
            steps: 0,
            last_pivot: None,
        })
    }

    #[inline]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> IterationSnapshot {
        IterationSnapshot {
            step: self.steps,
            pivot: self.last_pivot,
            tableau: self.tableau.clone(),
        }
    }

    /// Performs the next pivot, or reports that the run has terminated.
    /// Calling it again after termination returns the same answer.
    pub fn step(&mut self) -> Result<Step, RatLpError> {
        match self.next_decision() {
            PivotDecision::Optimal => Ok(Step::Optimal),

            PivotDecision::Unbounded { column } => Ok(Step::Unbounded { column }),

            PivotDecision::Pivot(pivot) => {
                self.apply(pivot)?;
                Ok(Step::Pivoted(pivot))
            }
        }
    }

    /// What the next call to `step` would do, without changing the tableau.
    #[inline]
    pub fn next_decision(&self) -> PivotDecision {
        self.rule.select(&self.tableau)
    }

    fn apply(&mut self, pivot: Pivot) -> Result<(), RatLpError> {
        debug!(
            "pivot on column x{}, row {}, leaving x{}",
            pivot.col + 1,
            pivot.row + 1,
            self.tableau.basic()[pivot.row] + 1
        );

        self.tableau.pivot(pivot)?;
        self.steps += 1;
        self.last_pivot = Some(pivot);

        debug_assert!(self.tableau.is_canonical());
        debug_assert!(self.tableau.is_primal_feasible());

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub snapshots: Vec<IterationSnapshot>,
    pub result: SolverResult,
}

pub struct SimplexSolver {
    max_iter: u64,
    pivot_rule: PivotRule,
}

impl std::default::Default for SimplexSolver {
    fn default() -> Self {
        Self {
            max_iter: u64::MAX,
            pivot_rule: PivotRule::default(),
        }
    }
}

impl SimplexSolver {
    pub fn new(max_iter: Option<u64>) -> Self {
        Self {
            max_iter: max_iter.unwrap_or(u64::MAX),
            ..Default::default()
        }
    }

    pub fn with_pivot_rule(mut self, pivot_rule: PivotRule) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    pub fn solve(&self, lp: &LinearProgram) -> RatLpResult {
        self.solve_with_observer(lp, |_snapshot| ())
    }

    /// Solves and keeps every snapshot.
    pub fn trace(&self, lp: &LinearProgram) -> Result<Trace, RatLpError> {
        let mut snapshots = Vec::new();
        let result = self.solve_with_observer(lp, |snapshot| snapshots.push(snapshot.clone()))?;

        Ok(Trace { snapshots, result })
    }

    pub fn solve_with_observer<F>(&self, lp: &LinearProgram, mut observer: F) -> RatLpResult
    where
        F: FnMut(&IterationSnapshot),
    {
        info!(
            "solving problem with {} variables and {} constraints",
            lp.n(),
            lp.m()
        );

        trace!("c: {}", lp.c);
        trace!("A: {}", lp.A);
        trace!("b: {}", lp.b);

        let mut run = SimplexRun::new(lp, self.pivot_rule)?;

        observer(&run.snapshot());

        info!("Iteration  |  Objective");

        loop {
            info!(
                "{:it$}  |  {}",
                run.steps(),
                run.tableau().value(),
                it = ITER_WIDTH
            );

            match run.next_decision() {
                PivotDecision::Pivot(..) if run.steps() >= self.max_iter => {
                    info!("reached maximum iterations");
                    return Ok(SolverResult::MaxIter { steps: run.steps() });
                }

                PivotDecision::Pivot(pivot) => {
                    run.apply(pivot)?;
                    observer(&run.snapshot());
                }

                PivotDecision::Optimal => {
                    let solution = Solution::new(lp, run.tableau(), run.steps());

                    info!(
                        "found optimal point with objective value {}",
                        solution.obj()
                    );

                    return Ok(SolverResult::Optimal(solution));
                }

                PivotDecision::Unbounded { column } => {
                    info!("problem is unbounded along x{}", column + 1);
                    return Ok(SolverResult::Unbounded { column });
                }
            }
        }
    }
}
