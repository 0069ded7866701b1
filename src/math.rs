// A module which contains the algorithms to build sharing polynomials, evaluate shares and
// interpolate them back into polynomials.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::poly::Polynomial;

/// Returns the unique polynomial of degree lower than `points.len()` going through every
/// point, using [Lagrange's formula](https://en.wikipedia.org/wiki/Lagrange_polynomial).
///
/// Fails with [`Error::EmptyInput`] when no point is given and with
/// [`Error::DuplicatePoint`] when two points share an x-coordinate, whether or not their
/// y-coordinates agree.
///
/// ```
/// use ratsss::{interpolate, Point, Polynomial};
///
/// let p = interpolate(&[Point::new(1, 1), Point::new(2, 0)]).unwrap();
/// assert_eq!(p, Polynomial::from_integers([2, -1]));
/// ```
pub fn interpolate(points: &[Point]) -> Result<Polynomial> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut points = points.to_vec();
    points.sort();
    if let Some(pair) = points.windows(2).find(|pair| pair[0].x() == pair[1].x()) {
        return Err(Error::DuplicatePoint {
            x: pair[1].x().clone(),
        });
    }

    debug!(points = points.len(), "interpolating polynomial");

    Ok((0..points.len()).map(|i| basis_term(&points, i)).sum())
}

// The i-th Lagrange basis polynomial scaled by y_i: one at x_i, zero at every other x_j.
fn basis_term(points: &[Point], i: usize) -> Polynomial {
    let xi = points[i].x();
    let basis: Polynomial = points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(_, pj)| {
            // (x - x_j) / (x_i - x_j)
            let diff = xi - pj.x();
            Polynomial::new(vec![
                BigRational::new(-pj.x(), diff.clone()),
                BigRational::new(BigInt::one(), diff),
            ])
        })
        .product();

    basis * Polynomial::from_integers([points[i].y().clone()])
}

// Generates `k` polynomial coefficients, the first one being `secret` and the others
// `secret.len()` random bytes each. Coefficient degrees go from lower to higher.
pub fn random_polynomial<R: RngCore + CryptoRng>(
    secret: &[u8],
    k: usize,
    rng: &mut R,
) -> Result<Polynomial> {
    let mut coefficients = Vec::with_capacity(k.max(1));
    coefficients.push(rational_from_bytes(secret));

    for _ in 1..k {
        #[cfg(feature = "zeroize_memory")]
        let mut bytes = Zeroizing::new(vec![0u8; secret.len()]);
        #[cfg(not(feature = "zeroize_memory"))]
        let mut bytes = vec![0u8; secret.len()];

        rng.try_fill_bytes(bytes.as_mut_slice())
            .map_err(Error::RandomSourceFailure)?;
        coefficients.push(rational_from_bytes(&bytes));
    }

    Ok(Polynomial::new(coefficients))
}

fn rational_from_bytes(bytes: &[u8]) -> BigRational {
    BigRational::from_integer(BigInt::from_bytes_be(Sign::Plus, bytes))
}

// Returns an iterator over the points of `polynomial`.
// The n-th item (counting from zero) is the evaluation at `x = n + 1`, and the iterator never ends.
// The y-coordinate is the numerator of the evaluation, which is exact for integer polynomials.
pub fn get_evaluator(polynomial: Polynomial) -> impl Iterator<Item = Point> {
    (1u64..).map(move |x| {
        let x = BigInt::from(x);
        let y = polynomial.evaluate(&BigRational::from_integer(x.clone()));
        trace!(%x, "evaluated share");
        Point::new(x, y.numer().clone())
    })
}
