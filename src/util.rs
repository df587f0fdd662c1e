use num_bigint::BigInt;

pub type Rational = num_rational::BigRational;

/// Column width of the iteration counter in the progress log.
pub const ITER_WIDTH: usize = 10;

#[inline]
pub fn rational(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

#[inline]
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}
