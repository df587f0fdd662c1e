use crate::error::RatLpError;
use crate::problem::{ConstraintOp, Direction, Problem, VariableId};
use crate::util::Rational;

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, digit1, one_of, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, value};
use nom::multi::separated_list1;
use nom::sequence::{pair, preceded, terminated, tuple};
use nom::IResult;

use log::debug;

use num_bigint::BigInt;
use num_traits::Zero;

use std::str::FromStr;

impl std::convert::TryFrom<&str> for Problem {
    type Error = RatLpError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        parse_problem(text)
    }
}

impl FromStr for Problem {
    type Err = RatLpError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_problem(text)
    }
}

/// Parses
/// ```text
/// max 5 2
/// 10 12 <= 60
/// 2 1 <= 6
/// ```
/// The first line gives the direction and the objective coefficients, every
/// following line the coefficients, sign and right-hand side of a constraint.
pub fn parse_problem(text: &str) -> Result<Problem, RatLpError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_i, line)| !line.is_empty());

    let (line_no, objective_line) = lines
        .next()
        .ok_or_else(|| RatLpError::Parse("missing objective line".to_string()))?;

    let (direction, obj_coeffs) = run(objective, objective_line, line_no)?;

    let mut prob = Problem::new(direction);

    let vars = obj_coeffs
        .into_iter()
        .map(|c_j| prob.add_var(c_j, None))
        .collect::<Result<Vec<VariableId>, _>>()?;

    for (line_no, line) in lines {
        let (coeffs, op, rhs) = run(constraint, line, line_no)?;

        if coeffs.len() != vars.len() {
            return Err(RatLpError::Parse(format!(
                "line {}: {} coefficients, expected: {}",
                line_no,
                coeffs.len(),
                vars.len()
            )));
        }

        prob.add_constraint(vars.iter().copied().zip(coeffs).collect(), op, rhs)?;
    }

    debug!(
        "parsed problem with {} variables and {} constraints",
        prob.vars().len(),
        prob.constraints().len()
    );

    Ok(prob)
}

fn run<'a, O, P>(parser: P, line: &'a str, line_no: usize) -> Result<O, RatLpError>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(line)
        .map(|(_rest, out)| out)
        .map_err(|err| RatLpError::Parse(format!("line {}: {:?}", line_no, err)))
}

fn objective(i: &str) -> IResult<&str, (Direction, Vec<Rational>)> {
    let (i, direction) = alt((
        value(Direction::Maximize, tag_no_case("max")),
        value(Direction::Minimize, tag_no_case("min")),
    ))(i)?;

    let (i, coeffs) = preceded(space1, separated_list1(space1, number))(i)?;

    Ok((i, (direction, coeffs)))
}

fn constraint(i: &str) -> IResult<&str, (Vec<Rational>, ConstraintOp, Rational)> {
    tuple((
        terminated(separated_list1(space1, number), space0),
        terminated(constraint_op, space0),
        number,
    ))(i)
}

fn constraint_op(i: &str) -> IResult<&str, ConstraintOp> {
    alt((
        value(ConstraintOp::Lte, alt((tag("<="), tag("\u{2264}")))),
        value(ConstraintOp::Gte, alt((tag(">="), tag("\u{2265}")))),
        value(ConstraintOp::Eq, tag("=")),
    ))(i)
}

/// Integer, decimal (`2.5`) or fraction (`3/4`), optionally signed.
fn number(i: &str) -> IResult<&str, Rational> {
    let (i, negative) = map(opt(one_of("+-")), |sign| sign == Some('-'))(i)?;

    let (i, magnitude) = alt((fraction, decimal))(i)?;

    Ok((i, if negative { -magnitude } else { magnitude }))
}

fn fraction(i: &str) -> IResult<&str, Rational> {
    let (rest, (numer, denom)) = pair(natural, preceded(char('/'), natural))(i)?;

    if denom.is_zero() {
        return Err(nom::Err::Failure(nom::error::Error::new(
            i,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((rest, Rational::new(numer, denom)))
}

fn decimal(i: &str) -> IResult<&str, Rational> {
    let (i, (int_part, frac_part)) = pair(natural, opt(preceded(char('.'), digits)))(i)?;

    let value = match frac_part {
        Some((frac, places)) => {
            let denom = num_traits::pow(BigInt::from(10), places);
            Rational::new(int_part * &denom + frac, denom)
        }

        None => Rational::from_integer(int_part),
    };

    Ok((i, value))
}

fn natural(i: &str) -> IResult<&str, BigInt> {
    map(digits, |(n, _places)| n)(i)
}

//value and number of digits, the latter gives the scale of a decimal fraction
fn digits(i: &str) -> IResult<&str, (BigInt, usize)> {
    map_res(digit1, |d: &str| d.parse::<BigInt>().map(|n| (n, d.len())))(i)
}
