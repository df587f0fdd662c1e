use crate::tableau::{Pivot, Tableau};
use crate::util::Rational;

use num_traits::Signed;

use log::trace;

/// Rule used to choose the entering column and break ratio-test ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRule {
    /// Most negative reduced cost, ties on the smallest column and row index.
    /// Can cycle on degenerate problems.
    Dantzig,

    /// Smallest index with a negative reduced cost, ratio ties broken by the
    /// smallest basic variable index. Never cycles.
    Bland,
}

impl std::default::Default for PivotRule {
    fn default() -> Self {
        PivotRule::Dantzig
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotDecision {
    Optimal,
    Unbounded { column: usize },
    Pivot(Pivot),
}

impl PivotRule {
    pub fn select(&self, tableau: &Tableau) -> PivotDecision {
        let col = match self.entering_column(tableau) {
            Some(col) => col,
            None => return PivotDecision::Optimal,
        };

        match self.leaving_row(tableau, col) {
            Some(row) => PivotDecision::Pivot(Pivot::new(row, col)),
            None => PivotDecision::Unbounded { column: col },
        }
    }

    fn entering_column(&self, tableau: &Tableau) -> Option<usize> {
        let negative = tableau
            .cost()
            .iter()
            .enumerate()
            .filter(|(_j, cost_j)| cost_j.is_negative());

        let entering = match self {
            PivotRule::Dantzig => {
                negative.fold(None::<(usize, &Rational)>, |best, (j, cost_j)| {
                    match best {
                        //strict comparison keeps the smallest index on ties
                        Some((_, best_cost)) if cost_j >= best_cost => best,
                        _ => Some((j, cost_j)),
                    }
                })
            }
            PivotRule::Bland => negative.min_by_key(|(j, _cost_j)| *j),
        };

        entering.map(|(j, _cost_j)| j)
    }

    fn leaving_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let basic = tableau.basic();
        let mut best: Option<(usize, Rational)> = None;

        for (i, (t_ij, b_i)) in tableau
            .coeffs()
            .column(col)
            .iter()
            .zip(tableau.rhs().iter())
            .enumerate()
        {
            if !t_ij.is_positive() {
                continue;
            }

            let ratio = b_i / t_ij;

            trace!("row: {}, ratio: {}", i, ratio);

            let replace = match &best {
                None => true,
                Some((best_row, best_ratio)) => match self {
                    PivotRule::Dantzig => ratio < *best_ratio,
                    PivotRule::Bland => {
                        ratio < *best_ratio
                            || (ratio == *best_ratio && basic[i] < basic[*best_row])
                    }
                },
            };

            if replace {
                best = Some((i, ratio));
            }
        }

        best.map(|(i, _ratio)| i)
    }
}

/// True when no reduced cost is negative.
pub fn is_optimal(tableau: &Tableau) -> bool {
    tableau.cost().iter().all(|cost_j| !cost_j.is_negative())
}

/// True when some column with negative reduced cost has no positive entry.
pub fn has_unbounded_ray(tableau: &Tableau) -> bool {
    tableau
        .cost()
        .iter()
        .enumerate()
        .filter(|(_j, cost_j)| cost_j.is_negative())
        .any(|(j, _cost_j)| {
            tableau
                .coeffs()
                .column(j)
                .iter()
                .all(|t_ij| !t_ij.is_positive())
        })
}
