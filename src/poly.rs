// Dense polynomials over the rationals. Coefficient `i` multiplies `x^i`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// A polynomial with exact rational coefficients, lowest power first.
///
/// Trailing zero coefficients are kept as they are: arithmetic never trims
/// them, and two polynomials only compare equal when their coefficient
/// sequences do.
///
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use ratsss::Polynomial;
///
/// let p = Polynomial::from_integers([1, 2, 1]);
/// let q = Polynomial::from_integers([7, 5, 3]);
/// assert_eq!(&p * &q, Polynomial::from_integers([7, 19, 20, 11, 3]));
/// assert_eq!(p.to_string(), "1+2x+1x^2");
///
/// let nine = BigRational::from_integer(BigInt::from(9));
/// assert_eq!(p.evaluate(&nine), BigRational::from_integer(BigInt::from(100)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigRational>,
}

impl Polynomial {
    /// Builds a polynomial from rational coefficients, lowest power first.
    pub fn new(coefficients: Vec<BigRational>) -> Self {
        Polynomial { coefficients }
    }

    /// Builds a polynomial from integer coefficients, lowest power first.
    pub fn from_integers<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        coefficients
            .into_iter()
            .map(|c| BigRational::from_integer(c.into()))
            .collect()
    }

    /// The polynomial without any coefficient. It evaluates to zero everywhere
    /// and is the identity for addition.
    pub fn zero() -> Self {
        Polynomial::default()
    }

    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficients
    }

    /// Coefficient of `x^0`, or zero when there are no coefficients.
    pub fn constant(&self) -> BigRational {
        self.coefficients
            .first()
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Highest power with a nonzero coefficient. Constant polynomials,
    /// including the zero polynomial, have degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, c)| !c.is_zero())
            .map_or(0, |(i, _)| i)
    }

    /// Computes `sum(c[i] * x^i)` exactly.
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        self.coefficients
            .iter()
            .zip(0u32..)
            .fold(BigRational::zero(), |sum, (c, i)| sum + c * power(x, i))
    }
}

// Raises numerator and denominator independently so the result stays exact.
fn power(x: &BigRational, exponent: u32) -> BigRational {
    match exponent {
        0 => BigRational::one(),
        1 => x.clone(),
        _ if x.is_integer() => BigRational::from_integer(x.numer().pow(exponent)),
        _ => BigRational::new(x.numer().pow(exponent), x.denom().pow(exponent)),
    }
}

fn add_coefficients(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    let zero = BigRational::zero();
    (0..a.len().max(b.len()))
        .map(|i| a.get(i).unwrap_or(&zero) + b.get(i).unwrap_or(&zero))
        .collect()
}

fn multiply_coefficients(a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = vec![BigRational::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            product[i + j] += ai * bj;
        }
    }

    product
}

impl FromIterator<BigRational> for Polynomial {
    fn from_iter<I: IntoIterator<Item = BigRational>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::new(add_coefficients(&self.coefficients, &other.coefficients))
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

// The new coefficients are fully built before they replace the old ones.
impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &Polynomial) {
        let sum = add_coefficients(&self.coefficients, &other.coefficients);
        self.coefficients = sum;
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        Polynomial::new(multiply_coefficients(
            &self.coefficients,
            &other.coefficients,
        ))
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        &self * &other
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, other: &Polynomial) {
        let product = multiply_coefficients(&self.coefficients, &other.coefficients);
        self.coefficients = product;
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |mut acc, p| {
            acc += &p;
            acc
        })
    }
}

impl Product for Polynomial {
    fn product<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::from_integers([1]), |mut acc, p| {
            acc *= &p;
            acc
        })
    }
}

/// Renders terms from the lowest power up, skipping zero coefficients, e.g.
/// `7+2x+9x^2` or `1/3-x^2`. The zero polynomial renders as an empty string.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = 0;
        for (power, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if c.is_negative() {
                f.write_str("-")?;
            } else if terms > 0 {
                f.write_str("+")?;
            }

            let magnitude = c.abs();
            if magnitude.is_integer() {
                write!(f, "{}", magnitude.numer())?;
            } else {
                write!(f, "{}/{}", magnitude.numer(), magnitude.denom())?;
            }

            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
            terms += 1;
        }
        Ok(())
    }
}
