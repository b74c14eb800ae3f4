use math::Modulus;
use tracing::{debug, trace};

use crate::error::{ShamirError, ShamirResult};
use crate::params::ReconstructionPolicy;
use crate::share::{first_duplicate, Share, ShareSet};

/// Lagrange interpolation over ℤ_p under a [`ReconstructionPolicy`].
///
/// Stateless; one instance can serve any number of concurrent callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecretReconstructor {
    policy: ReconstructionPolicy,
}

impl SecretReconstructor {
    pub const fn new(policy: ReconstructionPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> &ReconstructionPolicy {
        &self.policy
    }

    /// Recover the constant term of the polynomial through `shares`.
    ///
    /// Validation runs before any arithmetic: an empty list fails with
    /// [`ShamirError::NoShares`], a repeated x with [`ShamirError::DuplicateX`],
    /// then the modulus and the policy preconditions are checked. The result
    /// lies in `[0, prime)`.
    ///
    /// With fewer points than the polynomial's degree + 1 the value returned is
    /// the constant term of a different, lower-degree polynomial. That is not
    /// detectable here unless the policy declares a threshold.
    pub fn reconstruct(&self, shares: &[Share], prime: u64) -> ShamirResult<u64> {
        self.interpolate_at(shares, 0, prime)
    }

    /// Recover the secret from an already validated [`ShareSet`].
    pub fn reconstruct_set(&self, shares: &ShareSet, prime: u64) -> ShamirResult<u64> {
        self.reconstruct(shares.as_slice(), prime)
    }

    /// Evaluate the interpolating polynomial through `shares` at `x`.
    pub fn interpolate_at(&self, shares: &[Share], x: u64, prime: u64) -> ShamirResult<u64> {
        ShareSet::check(shares)?;
        let modulus = Modulus::new(prime)?;
        self.policy.validate(shares, modulus)?;

        debug!(shares = shares.len(), modulus = prime, at = x, "interpolating");

        let xs: Vec<u64> = shares.iter().map(|share| share.x).collect();
        let weights = basis_weights(&xs, x, modulus)?;

        let value = shares
            .iter()
            .zip(weights)
            .fold(0, |acc, (share, weight)| {
                let term = modulus.mul(modulus.reduce_u64(share.y), weight);
                trace!(x = share.x, term, "lagrange term");
                modulus.add(acc, term)
            });

        debug!(shares = shares.len(), "interpolation finished");
        Ok(value)
    }
}

/// λ_i(at) = ∏_{j≠i} (at − x_j) / (x_i − x_j) mod p, one weight per x.
///
/// Every difference is renormalised into `[0, p)` before it is multiplied.
/// Two x-values that are distinct but congruent mod p leave a zero
/// denominator, reported as a [`math::MathError::NotInvertible`].
fn basis_weights(xs: &[u64], at: u64, modulus: Modulus) -> ShamirResult<Vec<u64>> {
    xs.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let (numerator, denominator) = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold((1, 1), |(num, den), (_, &xj)| {
                    (
                        modulus.mul(num, modulus.sub(at, xj)),
                        modulus.mul(den, modulus.sub(xi, xj)),
                    )
                });
            Ok(modulus.mul(numerator, modulus.inverse(denominator)?))
        })
        .collect()
}

/// Lagrange weights for evaluation at zero, so that `Σ λ_i · y_i = f(0)`.
///
/// The weights sum to `1 (mod prime)`.
pub fn lagrange_coefficients_at_zero(xs: &[u64], prime: u64) -> ShamirResult<Vec<u64>> {
    if xs.is_empty() {
        return Err(ShamirError::NoShares);
    }
    if let Some(x) = first_duplicate(xs.iter().copied()) {
        return Err(ShamirError::DuplicateX(x));
    }
    basis_weights(xs, 0, Modulus::new(prime)?)
}

/// Recover the secret under the default (strict) policy.
pub fn reconstruct(shares: &[Share], prime: u64) -> ShamirResult<u64> {
    SecretReconstructor::default().reconstruct(shares, prime)
}

/// Evaluate the interpolating polynomial at `x` under the default policy.
pub fn interpolate_at(shares: &[Share], x: u64, prime: u64) -> ShamirResult<u64> {
    SecretReconstructor::default().interpolate_at(shares, x, prime)
}
