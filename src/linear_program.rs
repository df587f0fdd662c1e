#![allow(non_snake_case)]

use crate::error::RatLpError;
use crate::problem::{ConstraintOp, Direction, Problem};
use crate::util::Rational;

use num_traits::Zero;

/// A problem normalized to `maximize cᵀx s.t. Ax (op) b, x ≥ 0`.
///
/// `c` is always oriented for maximization. When the problem was stated as a
/// minimization, `c` holds the negated coefficients and `direction` remembers
/// the original request.
#[derive(Debug, Clone)]
pub struct LinearProgram {
    pub(crate) c: nalgebra::DVector<Rational>,
    pub(crate) A: nalgebra::DMatrix<Rational>,
    pub(crate) b: nalgebra::DVector<Rational>,
    pub(crate) signs: Vec<ConstraintOp>,
    pub(crate) direction: Direction,
}

impl LinearProgram {
    /// Builds a maximization problem from dense rows.
    pub fn new(
        c: Vec<Rational>,
        A: Vec<Vec<Rational>>,
        b: Vec<Rational>,
        signs: Vec<ConstraintOp>,
    ) -> Result<Self, RatLpError> {
        let n = c.len();
        let m = A.len();

        if n == 0 {
            return Err(RatLpError::invalid(
                "problem needs at least one decision variable".to_string(),
            ));
        }

        if m == 0 {
            return Err(RatLpError::invalid(
                "problem needs at least one constraint".to_string(),
            ));
        }

        if let Some((i, row)) = A.iter().enumerate().find(|(_i, row)| row.len() != n) {
            return Err(RatLpError::invalid(format!(
                "constraint {} has {} coefficients, expected: {}",
                i,
                row.len(),
                n
            )));
        }

        if b.len() != m {
            return Err(RatLpError::invalid(format!(
                "b dimensions invalid: {}, expected: {}",
                b.len(),
                m
            )));
        }

        if signs.len() != m {
            return Err(RatLpError::invalid(format!(
                "signs dimensions invalid: {}, expected: {}",
                signs.len(),
                m
            )));
        }

        let A = nalgebra::DMatrix::from_fn(m, n, |i, j| A[i][j].clone());

        Ok(Self {
            c: nalgebra::DVector::from_vec(c),
            A,
            b: nalgebra::DVector::from_vec(b),
            signs,
            direction: Direction::Maximize,
        })
    }

    /// Number of decision variables.
    #[inline]
    pub fn n(&self) -> usize {
        self.A.ncols()
    }

    /// Number of constraints.
    #[inline]
    pub fn m(&self) -> usize {
        self.A.nrows()
    }

    #[inline]
    pub fn obj_coeffs(&self) -> &nalgebra::DVector<Rational> {
        &self.c
    }

    #[inline]
    pub fn coeffs(&self) -> &nalgebra::DMatrix<Rational> {
        &self.A
    }

    #[inline]
    pub fn rhs(&self) -> &nalgebra::DVector<Rational> {
        &self.b
    }

    #[inline]
    pub fn signs(&self) -> &[ConstraintOp] {
        &self.signs
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Σ c_j x_j over the decision variables, using `c` as stored here.
    pub fn obj(&self, x: &[Rational]) -> Rational {
        self.c
            .iter()
            .zip(x)
            .fold(Rational::zero(), |acc, (c_j, x_j)| acc + c_j * x_j)
    }
}

impl std::convert::TryFrom<&Problem> for LinearProgram {
    type Error = RatLpError;

    fn try_from(prob: &Problem) -> Result<Self, Self::Error> {
        let n = prob.vars().len();
        let m = prob.constraints().len();

        let c = prob
            .vars()
            .iter()
            .map(|var| match prob.direction {
                Direction::Maximize => var.obj_coeff.clone(),
                Direction::Minimize => -var.obj_coeff.clone(),
            })
            .collect();

        let mut A = vec![vec![Rational::zero(); n]; m];
        let mut b = Vec::with_capacity(m);
        let mut signs = Vec::with_capacity(m);

        for (i, constraint) in prob.constraints().iter().enumerate() {
            for (id, coeff) in &constraint.coeffs {
                A[i][usize::from(id)] += coeff;
            }

            b.push(constraint.rhs.clone());
            signs.push(constraint.op);
        }

        let mut lp = LinearProgram::new(c, A, b, signs)?;
        lp.direction = prob.direction;
        Ok(lp)
    }
}
