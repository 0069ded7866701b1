//! Exact rational polynomial arithmetic, [Lagrange interpolation](https://en.wikipedia.org/wiki/Lagrange_polynomial)
//! and a threshold secret sharing scheme built on top of them.
//!
//! A secret is split into `n` shares such that any `k` of them recover it exactly. Shares are
//! [`Point`]s on a random polynomial of degree `k - 1` whose constant term is the secret read as
//! a big-endian unsigned integer. Recovery interpolates the points and reads the constant term
//! back.
//!
//! # Usage
//! ## (std)
//!
//! ```
//! use ratsss::{reveal, SecretSharing};
//!
//! // Set a minimum threshold of 3 shares
//! let sss = SecretSharing(3);
//! // Get 5 shares for secret [1, 2, 3, 4]
//! # #[cfg(feature = "std")]
//! # {
//! let shares = sss.split(&[1, 2, 3, 4], 5).unwrap();
//! // Recover the original secret from any 3 of them!
//! let secret = reveal(&shares[2..]).unwrap();
//! assert_eq!(secret, vec![1, 2, 3, 4]);
//! # }
//! ```
//!
//! ## (no std)
//!
//! ```
//! use ratsss::{reveal, Point, SecretSharing};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let sss = SecretSharing(3);
//! let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
//! // Obtain an iterator over the shares for secret [1, 2, 3, 4]
//! let dealer = sss.dealer_rng(&[1, 2, 3, 4], &mut rng).unwrap();
//! let shares = dealer.skip(4).take(3).collect::<Vec<Point>>();
//! let secret = reveal(&shares).unwrap();
//! assert_eq!(secret, vec![1, 2, 3, 4]);
//! ```
//!
//! # Arithmetic
//!
//! Coefficients and shares are arbitrary-precision integers, not elements of a finite field.
//! Share values grow with the share index and reveal how large the coefficients are, so the
//! scheme does not hide the secret the way Shamir's scheme over a prime field does unless the
//! caller bounds the coefficient magnitudes itself.
//!
//! # Feature flags
//!
//! - `std` — enables `dealer` and `split` convenience (uses `rand::thread_rng`). Without `std`,
//!   use `dealer_rng` and `split_rng`.
//! - `zeroize_memory` — wipes the random coefficient buffers once they have been consumed.
//! - `fuzzing` — derives `arbitrary::Arbitrary` for [`Point`].
//!
//! Example (Cargo.toml):
//!
//! ```toml
//! ratsss = { version = "0.1", default-features = false, features = ["zeroize_memory"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod math;
mod point;
mod poly;

extern crate alloc;

use alloc::vec::Vec;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

pub use error::{Error, Result};
pub use math::interpolate;
pub use point::Point;
pub use poly::Polynomial;

/// Tuple struct which implements methods to generate shares of a secret.
/// Its only parameter is the minimum shares threshold `k`.
///
/// Usage example:
/// ```
/// # use ratsss::{reveal, SecretSharing};
/// # use num_bigint::BigInt;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
/// // Set a minimum threshold of 10 shares
/// let sss = SecretSharing(10);
/// let mut rng = ChaCha20Rng::from_seed([10; 32]);
/// // Get 12 shares for secret [1, 2, 3, 4]
/// let shares = sss.split_rng(&[1, 2, 3, 4], 12, &mut rng).unwrap();
/// assert_eq!(shares[0].x(), &BigInt::from(1));
/// // Recover the original secret!
/// let secret = reveal(&shares[..10]).unwrap();
/// assert_eq!(secret, vec![1, 2, 3, 4]);
/// ```
pub struct SecretSharing(pub usize);

impl SecretSharing {
    /// This method is useful when `std` is not available. For typical usage
    /// see the `dealer` method.
    ///
    /// Given a `secret` byte slice, returns an `Iterator` along new shares at
    /// `x = 1, 2, 3...`. The iterator is unbounded.
    /// A random number generator has to be provided; each of the `k - 1` random
    /// coefficients takes `secret.len()` bytes from it.
    pub fn dealer_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<impl Iterator<Item = Point>> {
        let polynomial = math::random_polynomial(secret, self.0, rng)?;
        Ok(math::get_evaluator(polynomial))
    }

    /// Given a `secret` byte slice, returns an `Iterator` along new shares.
    #[cfg(feature = "std")]
    pub fn dealer(&self, secret: &[u8]) -> Result<impl Iterator<Item = Point>> {
        let mut rng = rand::thread_rng();
        self.dealer_rng(secret, &mut rng)
    }

    /// Returns exactly `n` shares of `secret`, evaluated at `x = 1..=n`.
    pub fn split_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &[u8],
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        debug!(n, k = self.0, secret_len = secret.len(), "splitting secret");
        Ok(self.dealer_rng(secret, rng)?.take(n).collect())
    }

    #[cfg(feature = "std")]
    pub fn split(&self, secret: &[u8], n: usize) -> Result<Vec<Point>> {
        let mut rng = rand::thread_rng();
        self.split_rng(secret, n, &mut rng)
    }
}

/// Splits `secret` into `n` shares, any `k` of which recover it.
#[cfg(feature = "std")]
pub fn split(secret: &[u8], n: usize, k: usize) -> Result<Vec<Point>> {
    SecretSharing(k).split(secret, n)
}

/// Splits `secret` into `n` shares, any `k` of which recover it, drawing the
/// random coefficients from `rng`.
pub fn split_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    n: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Point>> {
    SecretSharing(k).split_rng(secret, n, rng)
}

/// Given a collection of shares, recovers the original secret as big-endian
/// bytes without leading zeros. A zero secret comes back empty.
///
/// There is no threshold check: fewer than `k` shares, or shares from
/// different splits, produce either an `Err` or a wrong secret. The only
/// detected inconsistency is a constant term which is not an integer.
///
/// Example:
/// ```
/// # use ratsss::{reveal, Point};
/// let secret = reveal(&[Point::new(1, 325), Point::new(3, 2383), Point::new(5, 6609)]);
/// assert_eq!(secret.unwrap(), vec![109]);
/// ```
pub fn reveal(shares: &[Point]) -> Result<Vec<u8>> {
    let polynomial = interpolate(shares)?;
    let constant = polynomial.constant();
    if !constant.is_integer() {
        warn!(%constant, "reconstructed constant term is not an integer");
        return Err(Error::NonIntegerReconstruction { constant });
    }

    let magnitude = constant.numer().magnitude();
    if magnitude.is_zero() {
        Ok(Vec::new())
    } else {
        Ok(magnitude.to_bytes_be())
    }
}

/// Like [`reveal`], but left-pads the secret with zeros up to `len` bytes, so
/// secrets with leading zero bytes come back unchanged. Longer results are
/// returned as they are.
pub fn reveal_padded(shares: &[Point], len: usize) -> Result<Vec<u8>> {
    let secret = reveal(shares)?;
    if secret.len() >= len {
        return Ok(secret);
    }

    let mut padded = alloc::vec![0u8; len - secret.len()];
    padded.extend_from_slice(&secret);
    Ok(padded)
}
