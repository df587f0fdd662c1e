#![allow(non_snake_case)]

use crate::error::RatLpError;
use crate::linear_program::LinearProgram;
use crate::problem::ConstraintOp;
use crate::util::Rational;

use num_traits::{One, Signed, Zero};

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

impl Pivot {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Dense simplex tableau in canonical form.
///
/// Columns `0..n` are the decision variables, columns `n..n+m` the slack
/// variables. Every pivot keeps the basic columns equal to the identity and
/// their reduced costs equal to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    T: nalgebra::DMatrix<Rational>,
    B: nalgebra::DVector<Rational>,
    cost: nalgebra::DVector<Rational>,
    basic: Vec<usize>,

    //right-hand side of the cost row, equal to the current objective value
    value: Rational,
    n: usize,
}

impl Tableau {
    /// Starts from the slack basis. Only `≤` constraints with a non-negative
    /// right-hand side are accepted, anything else would need a phase 1.
    pub fn build(lp: &LinearProgram) -> Result<Self, RatLpError> {
        let n = lp.n();
        let m = lp.m();

        if lp.c.len() != n || lp.b.len() != m || lp.signs.len() != m {
            return Err(RatLpError::invalid(format!(
                "inconsistent dimensions: {} objective coefficients, {} right-hand sides \
                 and {} signs for a {}x{} constraint matrix",
                lp.c.len(),
                lp.b.len(),
                lp.signs.len(),
                m,
                n
            )));
        }

        if let Some((row, &op)) = lp
            .signs
            .iter()
            .enumerate()
            .find(|(_i, op)| **op != ConstraintOp::Lte)
        {
            return Err(RatLpError::UnsupportedConstraint { row, op });
        }

        if let Some((row, rhs)) = lp.b.iter().enumerate().find(|(_i, b_i)| b_i.is_negative()) {
            return Err(RatLpError::NegativeRhs {
                row,
                rhs: rhs.clone(),
            });
        }

        let T = nalgebra::DMatrix::from_fn(m, n + m, |i, j| {
            if j < n {
                lp.A[(i, j)].clone()
            } else if j - n == i {
                Rational::one()
            } else {
                Rational::zero()
            }
        });

        let cost = nalgebra::DVector::from_fn(n + m, |j, _| {
            if j < n {
                -lp.c[j].clone()
            } else {
                Rational::zero()
            }
        });

        Ok(Self {
            T,
            B: lp.b.clone(),
            cost,
            basic: (n..n + m).collect(),
            value: Rational::zero(),
            n,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.T.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.T.ncols()
    }

    /// Number of decision variables, i.e. the index of the first slack column.
    #[inline]
    pub fn num_decision_vars(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn coeffs(&self) -> &nalgebra::DMatrix<Rational> {
        &self.T
    }

    #[inline]
    pub fn rhs(&self) -> &nalgebra::DVector<Rational> {
        &self.B
    }

    #[inline]
    pub fn cost(&self) -> &nalgebra::DVector<Rational> {
        &self.cost
    }

    #[inline]
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    #[inline]
    pub fn value(&self) -> &Rational {
        &self.value
    }

    /// Gauss-Jordan elimination on `pivot`, then `pivot.col` becomes basic in
    /// `pivot.row`.
    pub fn pivot(&mut self, pivot: Pivot) -> Result<(), RatLpError> {
        let Pivot { row: r, col: c } = pivot;

        if r >= self.rows() || c >= self.cols() {
            return Err(RatLpError::invalid(format!(
                "pivot ({}, {}) is outside the {}x{} tableau",
                r,
                c,
                self.rows(),
                self.cols()
            )));
        }

        let pivot_val = self.T[(r, c)].clone();

        if pivot_val.is_zero() {
            return Err(RatLpError::ZeroPivot { row: r, column: c });
        }

        for t_rj in self.T.row_mut(r).iter_mut() {
            *t_rj /= &pivot_val;
        }

        self.B[r] /= &pivot_val;

        let pivot_row: Vec<Rational> = self.T.row(r).iter().cloned().collect();
        let b_r = self.B[r].clone();

        for i in (0..self.rows()).filter(|&i| i != r) {
            let factor = self.T[(i, c)].clone();

            if factor.is_zero() {
                continue;
            }

            for (j, t_rj) in pivot_row.iter().enumerate() {
                self.T[(i, j)] -= &factor * t_rj;
            }

            self.B[i] -= &factor * &b_r;
        }

        let z_factor = self.cost[c].clone();

        if !z_factor.is_zero() {
            for (cost_j, t_rj) in self.cost.iter_mut().zip(&pivot_row) {
                *cost_j -= &z_factor * t_rj;
            }

            self.value -= &z_factor * &b_r;
        }

        self.basic[r] = c;

        trace!("tableau after pivot {:?}:\n{}", pivot, self);

        Ok(())
    }

    /// Dense assignment of all `n + m` variables, nonbasic ones are zero.
    pub fn extract_solution(&self) -> Vec<Rational> {
        let mut solution = vec![Rational::zero(); self.cols()];

        for (&basic, b_i) in self.basic.iter().zip(self.B.iter()) {
            solution[basic] = b_i.clone();
        }

        solution
    }

    /// Checks that the basic columns form an identity with zero reduced cost.
    pub fn is_canonical(&self) -> bool {
        let mut seen = vec![false; self.cols()];

        for (i, &j) in self.basic.iter().enumerate() {
            if j >= self.cols() || seen[j] {
                return false;
            }

            seen[j] = true;

            let column_ok = self.T.column(j).iter().enumerate().all(|(k, t_kj)| {
                if k == i {
                    t_kj.is_one()
                } else {
                    t_kj.is_zero()
                }
            });

            if !column_ok || !self.cost[j].is_zero() {
                return false;
            }
        }

        self.basic.len() == self.rows()
    }

    #[inline]
    pub fn is_primal_feasible(&self) -> bool {
        self.B.iter().all(|b_i| !b_i.is_negative())
    }
}
