use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigInt;

use crate::error::Error;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

// Big-endian length of the x field that prefixes every encoded point.
const HEADER_LEN: usize = 4;

/// A point `(x, y)` on a polynomial with integer coordinates. Shares produced
/// by [`crate::SecretSharing`] are points.
///
/// Points are ordered by `x` first, then by `y`.
///
/// They can be serialized to and from a byte array:
/// ```
/// use ratsss::Point;
/// use core::convert::TryFrom;
///
/// let point = Point::new(3, 2383);
/// let bytes = Vec::from(&point);
/// assert_eq!(bytes, vec![0, 0, 0, 1, 3, 0x09, 0x4f]);
/// assert_eq!(Point::try_from(bytes.as_slice()).unwrap(), point);
/// ```
///
/// # Serialization format:
/// `[len(x) as u32 big-endian][x signed big-endian][y signed big-endian]`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The abscissa the polynomial was evaluated at.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The value of the polynomial at [`Point::x`].
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<&Point> for Vec<u8> {
    fn from(p: &Point) -> Vec<u8> {
        let x = p.x.to_signed_bytes_be();
        let y = p.y.to_signed_bytes_be();
        let mut bytes = Vec::with_capacity(HEADER_LEN + x.len() + y.len());
        bytes.extend_from_slice(&(x.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&x);
        bytes.extend_from_slice(&y);
        bytes
    }
}

impl core::convert::TryFrom<&[u8]> for Point {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Point, Self::Error> {
        if s.len() < HEADER_LEN {
            return Err(Error::MalformedPoint(
                "A Point must be at least 4 bytes long",
            ));
        }

        let (header, rest) = s.split_at(HEADER_LEN);
        let x_len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        if x_len > rest.len() {
            return Err(Error::MalformedPoint("x length overruns the encoded point"));
        }

        let (x, y) = rest.split_at(x_len);
        Ok(Point::new(
            BigInt::from_signed_bytes_be(x),
            BigInt::from_signed_bytes_be(y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use crate::error::Error;
    use alloc::{vec, vec::Vec};
    use core::cmp::Ordering;
    use core::convert::TryFrom;
    use num_bigint::BigInt;

    #[test]
    fn ordering_compares_x_then_y() {
        assert_eq!(Point::new(1, 9).cmp(&Point::new(2, 0)), Ordering::Less);
        assert_eq!(Point::new(2, 0).cmp(&Point::new(1, 9)), Ordering::Greater);
        assert_eq!(Point::new(2, 1).cmp(&Point::new(2, 3)), Ordering::Less);
        assert_eq!(Point::new(2, 3).cmp(&Point::new(2, 3)), Ordering::Equal);
        assert_ne!(Point::new(2, 3), Point::new(2, 4));
    }

    #[test]
    fn sort_works() {
        let mut points = vec![Point::new(5, 1), Point::new(-1, 7), Point::new(5, 0)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(-1, 7), Point::new(5, 0), Point::new(5, 1)]
        );
    }

    #[test]
    fn vec_from_point_works() {
        let point = Point::new(1, -2);
        let bytes = Vec::from(&point);
        assert_eq!(bytes, vec![0, 0, 0, 1, 1, 0xfe]);
    }

    #[test]
    fn point_from_u8_slice_works() {
        let bytes: &[u8] = &[0, 0, 0, 2, 0x01, 0x00, 0xff];
        let point = Point::try_from(bytes).unwrap();
        assert_eq!(point.x(), &BigInt::from(256));
        assert_eq!(point.y(), &BigInt::from(-1));
    }

    #[test]
    fn large_point_survives_encoding() {
        let x = BigInt::from(u128::MAX) * BigInt::from(-7);
        let y = BigInt::from(u64::MAX).pow(5);
        let point = Point::new(x, y);
        let bytes = Vec::from(&point);
        assert_eq!(Point::try_from(bytes.as_slice()).unwrap(), point);
    }

    #[test]
    fn short_input_is_rejected() {
        let bytes: &[u8] = &[0, 0, 1];
        assert!(matches!(
            Point::try_from(bytes),
            Err(Error::MalformedPoint(_))
        ));
    }

    #[test]
    fn overrunning_length_is_rejected() {
        let bytes: &[u8] = &[0, 0, 0, 9, 1, 2];
        assert!(matches!(
            Point::try_from(bytes),
            Err(Error::MalformedPoint(_))
        ));
    }

    #[test]
    fn display_works() {
        assert_eq!(alloc::format!("{}", Point::new(3, -4)), "(3, -4)");
    }
}
