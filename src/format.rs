use crate::solver::{IterationSnapshot, Solution};
use crate::tableau::Tableau;
use crate::util::Rational;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

const DEFAULT_PLACES: usize = 1;
const CELL_WIDTH: usize = 6;

/// Renders `value` as a decimal with `places` digits after the point,
/// rounding half away from zero. Exact, no floating point involved.
pub fn to_fixed(value: &Rational, places: usize) -> String {
    let scale = num_traits::pow(BigInt::from(10), places);
    let numer = value.numer().abs() * &scale * 2u32 + value.denom();
    let scaled = numer / (value.denom() * 2u32);

    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let sign = if value.is_negative() && !scaled.is_zero() {
        "-"
    } else {
        ""
    };

    if places == 0 {
        format!("{}{}", sign, int_part)
    } else {
        format!(
            "{}{}.{:0>width$}",
            sign,
            int_part,
            frac_part.to_string(),
            width = places
        )
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let places = f.precision().unwrap_or(DEFAULT_PLACES);
        let width = CELL_WIDTH.max(places + 4);
        let cell = |v: &Rational| format!("{:>width$}", to_fixed(v, places), width = width);

        let headers: Vec<String> = (1..=self.cols())
            .map(|j| format!("x{}", j))
            .chain(std::iter::once("b".to_string()))
            .map(|h| format!("{:>width$}", h, width = width))
            .collect();

        let rule = "-".repeat(9 + (width + 2) * headers.len());

        writeln!(f, " Basic | {}", headers.join("  "))?;
        writeln!(f, "{}", rule)?;

        for (i, &basic) in self.basic().iter().enumerate() {
            let row: Vec<String> = self
                .coeffs()
                .row(i)
                .iter()
                .chain(std::iter::once(&self.rhs()[i]))
                .map(|v| cell(v))
                .collect();

            writeln!(f, " {:<6}| {}", format!("x{}", basic + 1), row.join("  "))?;
        }

        writeln!(f, "{}", rule)?;

        let cost: Vec<String> = self
            .cost()
            .iter()
            .chain(std::iter::once(self.value()))
            .map(|v| cell(v))
            .collect();

        write!(f, "       | {}", cost.join("  "))
    }
}

impl std::fmt::Display for IterationSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(pivot) = self.pivot {
            writeln!(
                f,
                ">>> pivot: column x{}, row {}",
                pivot.col + 1,
                pivot.row + 1
            )?;
        }

        writeln!(f, "Tableau {}:", self.step)?;

        match f.precision() {
            Some(places) => write!(f, "{:.*}", places, self.tableau),
            None => write!(f, "{}", self.tableau),
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let places = f.precision().unwrap_or(DEFAULT_PLACES);

        for (j, x_j) in self.x().iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, to_fixed(x_j, places))?;
        }

        write!(f, "Z = {}", to_fixed(&self.original_obj(), places))
    }
}
